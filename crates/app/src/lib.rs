//! # openship-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — read/write the persisted theme choice
//!   - `ColorSchemeProbe` — ask the platform whether it prefers dark
//!   - `ThemeSurface` — read/write the theme attribute on the document
//!   - `SkillRepository` — look up markdown skill documents
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ThemeBootstrapper` — resolve and apply the theme before first paint
//!   - `ThemeController` — state behind the interactive toggle
//!   - `SkillService` — fetch a skill or report it missing
//!
//! ## Dependency rule
//! Depends on `openship-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
