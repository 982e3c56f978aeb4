//! In-memory port implementations shared by the service tests.

use std::cell::{Cell, RefCell};

use openship_domain::error::{PlatformError, StorageError};
use openship_domain::theme::Theme;

use crate::ports::{ColorSchemeProbe, PreferenceStore, ThemeSurface};

#[derive(Default)]
pub struct MemoryStore {
    pub value: RefCell<Option<String>>,
    pub fail_load: bool,
    pub fail_save: bool,
    pub saves: Cell<usize>,
}

impl MemoryStore {
    pub fn holding(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_load {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value.borrow().clone())
    }

    fn save(&self, theme: Theme) -> Result<(), StorageError> {
        if self.fail_save {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        self.saves.set(self.saves.get() + 1);
        *self.value.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}

/// `None` simulates a platform that cannot answer.
pub struct FixedProbe(pub Option<bool>);

impl ColorSchemeProbe for FixedProbe {
    fn prefers_dark(&self) -> Result<bool, PlatformError> {
        self.0.ok_or(PlatformError::Unavailable)
    }
}

#[derive(Default)]
pub struct MemorySurface {
    pub attribute: RefCell<Option<String>>,
    pub writes: RefCell<Vec<Theme>>,
}

impl MemorySurface {
    pub fn attribute(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }
}

impl ThemeSurface for MemorySurface {
    fn applied(&self) -> Option<Theme> {
        self.attribute.borrow().as_deref()?.parse().ok()
    }

    fn apply(&self, theme: Theme) -> Result<(), PlatformError> {
        *self.attribute.borrow_mut() = Some(theme.as_str().to_string());
        self.writes.borrow_mut().push(theme);
        Ok(())
    }
}
