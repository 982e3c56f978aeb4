//! Platform ports — the color-scheme signal and the document attribute.

use openship_domain::error::PlatformError;
use openship_domain::theme::Theme;

/// Read-only access to the platform's color-scheme preference.
pub trait ColorSchemeProbe {
    /// Whether the platform currently asks for a dark palette.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the signal cannot be queried.
    fn prefers_dark(&self) -> Result<bool, PlatformError>;
}

/// The document-level theme attribute styling rules select on.
pub trait ThemeSurface {
    /// Theme currently applied, if the attribute holds a valid value.
    fn applied(&self) -> Option<Theme>;

    /// Write `theme` onto the attribute. Writing the same value twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when there is no document to write to.
    fn apply(&self, theme: Theme) -> Result<(), PlatformError>;
}

impl<T: ColorSchemeProbe + ?Sized> ColorSchemeProbe for &T {
    fn prefers_dark(&self) -> Result<bool, PlatformError> {
        (**self).prefers_dark()
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn applied(&self) -> Option<Theme> {
        (**self).applied()
    }

    fn apply(&self, theme: Theme) -> Result<(), PlatformError> {
        (**self).apply(theme)
    }
}
