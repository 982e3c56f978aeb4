//! # openship-domain
//!
//! Pure domain model for the Open Ship manifesto site.
//!
//! ## Responsibilities
//! - Define the **Theme** value (`light` / `dark`) and the side-effect-free
//!   precedence rule that picks the initial theme
//! - Define the toggle **Affordance** (which icon, which label)
//! - Hold the static **manifesto** copy rendered by the dashboard
//! - Define **Skill** documents served verbatim as markdown
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod affordance;
pub mod manifesto;
pub mod skill;
pub mod theme;
