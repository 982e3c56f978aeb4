//! Theme controller — the state behind the interactive toggle.

use openship_domain::affordance::Affordance;
use openship_domain::theme::Theme;

use crate::ports::{ColorSchemeProbe, PreferenceStore, ThemeSurface};
use crate::services::theme_bootstrapper::resolve_initial;

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Theme now held in state and applied on the document.
    pub theme: Theme,
    /// Whether the choice reached the preference store. When `false` the
    /// theme is still applied, it just will not survive a reload.
    pub persisted: bool,
}

/// Holds the current theme and keeps the document and store in line with it.
///
/// Every method completes synchronously, so no caller can observe state,
/// attribute and store disagreeing half-way through a toggle.
pub struct ThemeController<S, P, D> {
    store: S,
    probe: P,
    surface: D,
    current: Theme,
}

impl<S, P, D> ThemeController<S, P, D>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    D: ThemeSurface,
{
    /// Create a controller seeded from the attribute already on the document.
    ///
    /// [`Theme::Dark`] is used only when the attribute is missing or invalid,
    /// which means nothing bootstrapped the page.
    pub fn new(store: S, probe: P, surface: D) -> Self {
        let current = surface.applied().unwrap_or(Theme::Dark);
        Self {
            store,
            probe,
            surface,
            current,
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// What the toggle should display for the current theme.
    #[must_use]
    pub fn affordance(&self) -> Affordance {
        Affordance::for_current(self.current)
    }

    /// Reconcile with stored and system preference after the first render.
    ///
    /// Uses the same precedence as the bootstrapper and re-applies the result,
    /// which is a no-op when the bootstrapper already ran.
    pub fn mount(&mut self) -> Theme {
        let theme = resolve_initial(&self.store, &self.probe);
        if theme != self.current {
            tracing::debug!(from = %self.current, to = %theme, "theme reconciled on mount");
        }
        self.current = theme;
        if let Err(err) = self.surface.apply(theme) {
            tracing::debug!(error = %err, %theme, "could not apply theme on mount");
        }
        theme
    }

    /// Flip the theme, apply it and persist it.
    ///
    /// A failed write to the store does not roll the visual change back; it
    /// is logged and reported through [`ToggleOutcome::persisted`].
    pub fn toggle(&mut self) -> ToggleOutcome {
        let theme = self.current.toggled();
        self.current = theme;
        if let Err(err) = self.surface.apply(theme) {
            tracing::warn!(error = %err, %theme, "could not apply toggled theme");
        }
        let persisted = match self.store.save(theme) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, %theme, "theme applied but not persisted");
                false
            }
        };
        ToggleOutcome { theme, persisted }
    }
}
