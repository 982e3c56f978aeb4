//! Skill port — read access to published markdown documents.

use std::future::Future;

use openship_domain::error::OpenShipError;
use openship_domain::skill::{Skill, SkillName};

/// Repository of [`Skill`] documents.
pub trait SkillRepository {
    /// Fetch a skill by name, `None` when it does not exist.
    fn get_by_name(
        &self,
        name: &SkillName,
    ) -> impl Future<Output = Result<Option<Skill>, OpenShipError>> + Send;
}
