//! # openship-adapter-content-fs
//!
//! Filesystem adapter for published content.
//!
//! ## Responsibilities
//! - Implement the `SkillRepository` port defined in `openship-app::ports::skill`
//! - Map a validated skill name onto `{root}/{name}/SKILL.md`
//! - Return file contents verbatim, without parsing the markdown
//!
//! ## Dependency rule
//! Depends on `openship-app` (for port traits) and `openship-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod skill_repo;

pub use skill_repo::FsSkillRepository;
