//! Skill service — use-cases for published markdown skills.

use openship_domain::error::{NotFoundError, OpenShipError};
use openship_domain::skill::{Skill, SkillName};

use crate::ports::SkillRepository;

/// Application service for reading skill documents.
pub struct SkillService<R> {
    repo: R,
}

impl<R: SkillRepository> SkillService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a skill by name, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OpenShipError::NotFound`] when no skill with `name` exists,
    /// or a storage error from the repository.
    pub async fn get_skill(&self, name: &SkillName) -> Result<Skill, OpenShipError> {
        self.repo.get_by_name(name).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Skill",
                id: name.to_string(),
            }
            .into()
        })
    }
}
