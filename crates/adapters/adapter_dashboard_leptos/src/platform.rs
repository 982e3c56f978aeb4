//! Browser implementations of the theme ports, backed by `web-sys`.
//!
//! Every adapter is a unit struct: the browser globals are looked up on each
//! call, so a missing window or disabled storage surfaces as an error instead
//! of a panic.

use openship_app::ports::{ColorSchemeProbe, PreferenceStore, ThemeSurface};
use openship_app::services::theme_bootstrapper::ThemeBootstrapper;
use openship_app::services::theme_controller::ThemeController;
use openship_domain::error::{PlatformError, StorageError};
use openship_domain::theme::{DARK_SCHEME_QUERY, STORAGE_KEY, THEME_ATTRIBUTE, Theme};
use wasm_bindgen::JsValue;

/// Controller wired to the real browser.
pub type BrowserThemeController =
    ThemeController<LocalPreferenceStore, MediaColorSchemeProbe, DocumentThemeSurface>;

/// Bootstrapper wired to the real browser.
pub type BrowserThemeBootstrapper =
    ThemeBootstrapper<LocalPreferenceStore, MediaColorSchemeProbe, DocumentThemeSurface>;

#[must_use]
pub fn theme_controller() -> BrowserThemeController {
    ThemeController::new(LocalPreferenceStore, MediaColorSchemeProbe, DocumentThemeSurface)
}

#[must_use]
pub fn theme_bootstrapper() -> BrowserThemeBootstrapper {
    ThemeBootstrapper::new(LocalPreferenceStore, MediaColorSchemeProbe, DocumentThemeSurface)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`, under the `theme` key.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err| StorageError::Rejected(describe(&err)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|err| StorageError::Rejected(describe(&err)))
    }

    fn save(&self, theme: Theme) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(STORAGE_KEY, theme.as_str())
            .map_err(|err| StorageError::Rejected(describe(&err)))
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`, read once per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaColorSchemeProbe;

impl ColorSchemeProbe for MediaColorSchemeProbe {
    fn prefers_dark(&self) -> Result<bool, PlatformError> {
        let query = web_sys::window()
            .ok_or(PlatformError::Unavailable)?
            .match_media(DARK_SCHEME_QUERY)
            .map_err(|err| PlatformError::Call(describe(&err)))?;
        Ok(query.is_some_and(|list| list.matches()))
    }
}

/// The `data-theme` attribute on `<html>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentThemeSurface;

impl DocumentThemeSurface {
    fn root() -> Result<web_sys::Element, PlatformError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .ok_or(PlatformError::Unavailable)
    }
}

impl ThemeSurface for DocumentThemeSurface {
    fn applied(&self) -> Option<Theme> {
        Self::root()
            .ok()?
            .get_attribute(THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    fn apply(&self, theme: Theme) -> Result<(), PlatformError> {
        Self::root()?
            .set_attribute(THEME_ATTRIBUTE, theme.as_str())
            .map_err(|err| PlatformError::Call(describe(&err)))
    }
}

/// Set the browser tab title.
pub fn set_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}
