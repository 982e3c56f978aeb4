//! Theme bootstrapper — picks and applies the theme before anything renders.

use openship_domain::theme::{self, Theme};

use crate::ports::{ColorSchemeProbe, PreferenceStore, ThemeSurface};

/// Resolve the initial theme from the injected store and probe.
///
/// Read failures are logged and then treated as "no answer"; see
/// [`theme::resolve`] for the precedence.
pub fn resolve_initial<S, P>(store: &S, probe: &P) -> Theme
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
{
    let stored = store.load().inspect_err(|err| {
        tracing::debug!(error = %err, "stored theme unreadable, ignoring it");
    });
    let prefers_dark = probe.prefers_dark().inspect_err(|err| {
        tracing::debug!(error = %err, "color scheme signal unreadable");
    });
    theme::resolve(stored, prefers_dark)
}

/// One-shot pre-paint resolver.
///
/// Writes the document attribute exactly once and never touches the
/// preference store.
pub struct ThemeBootstrapper<S, P, D> {
    store: S,
    probe: P,
    surface: D,
}

impl<S, P, D> ThemeBootstrapper<S, P, D>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    D: ThemeSurface,
{
    pub fn new(store: S, probe: P, surface: D) -> Self {
        Self {
            store,
            probe,
            surface,
        }
    }

    /// Resolve the theme and apply it. Never fails: a missing document is
    /// logged and the resolved theme is still returned.
    pub fn run(&self) -> Theme {
        let theme = resolve_initial(&self.store, &self.probe);
        if let Err(err) = self.surface.apply(theme) {
            tracing::debug!(error = %err, %theme, "could not apply bootstrap theme");
        }
        theme
    }
}
