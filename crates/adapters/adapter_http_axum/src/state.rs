//! Shared application state for axum handlers.

use std::sync::Arc;

use openship_app::ports::SkillRepository;
use openship_app::services::skill_service::SkillService;

/// Application state shared across all axum handlers.
///
/// Generic over the skill repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR> {
    /// Skill lookup service.
    pub skill_service: Arc<SkillService<SR>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            skill_service: Arc::clone(&self.skill_service),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: SkillRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(skill_service: SkillService<SR>) -> Self {
        Self {
            skill_service: Arc::new(skill_service),
        }
    }
}
