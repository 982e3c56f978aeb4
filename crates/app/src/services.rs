//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod skill_service;
pub mod theme_bootstrapper;
pub mod theme_controller;

#[cfg(test)]
pub(crate) mod fakes;
