//! Preference port — the persisted theme choice.

use openship_domain::error::StorageError;
use openship_domain::theme::Theme;

/// Key-value persistence of the user's explicit theme choice.
pub trait PreferenceStore {
    /// Read the raw stored value.
    ///
    /// The value is returned untouched: validating it is the resolver's job.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the facility cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the facility refuses the write.
    fn save(&self, theme: Theme) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result<(), StorageError> {
        (**self).save(theme)
    }
}
