//! `SkillRepository` backed by a directory of skill folders.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use openship_app::ports::SkillRepository;
use openship_domain::error::OpenShipError;
use openship_domain::skill::{SKILL_FILE_NAME, Skill, SkillName};

use crate::error::ContentError;

/// Reads `{root}/{name}/SKILL.md`.
#[derive(Debug, Clone)]
pub struct FsSkillRepository {
    root: PathBuf,
}

impl FsSkillRepository {
    /// Create a repository rooted at `root` (typically `./skills`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &SkillName) -> PathBuf {
        self.root.join(name.as_str()).join(SKILL_FILE_NAME)
    }
}

impl SkillRepository for FsSkillRepository {
    async fn get_by_name(&self, name: &SkillName) -> Result<Option<Skill>, OpenShipError> {
        let path = self.path_for(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(markdown) => Ok(Some(Skill {
                name: name.clone(),
                markdown,
            })),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "skill file not found");
                Ok(None)
            }
            Err(source) => Err(ContentError::Read { path, source }.into()),
        }
    }
}
