//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The theme ports are synchronous: they are driven from a single-threaded
//! event loop and every call completes without suspending.

pub mod platform;
pub mod preference;
pub mod skill;

pub use platform::{ColorSchemeProbe, ThemeSurface};
pub use preference::PreferenceStore;
pub use skill::SkillRepository;
