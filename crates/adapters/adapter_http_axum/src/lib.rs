//! # openship-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve **skill documents** verbatim as `text/markdown`
//!   (`/skills/{name}`)
//! - Serve the compiled **site assets** (the Leptos bundle, `index.html`,
//!   stylesheets) from a directory on disk, falling back to `index.html`
//!   so client-side routes resolve
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `openship-app` (for port traits and services) and `openship-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod error;
pub mod router;
pub mod site;
#[allow(clippy::missing_errors_doc)]
pub mod skills;
pub mod state;
