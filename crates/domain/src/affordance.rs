//! What the theme toggle shows: an icon and an accessible label that both
//! point at the theme a click would switch to.

use crate::theme::Theme;

/// Icon drawn inside the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
}

/// The toggle's "switch to X" affordance for a given current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    /// Theme a click would apply.
    pub target: Theme,
    pub icon: Icon,
}

impl Affordance {
    /// Derive the affordance shown while `current` is applied.
    #[must_use]
    pub fn for_current(current: Theme) -> Self {
        let icon = match current {
            Theme::Dark => Icon::Sun,
            Theme::Light => Icon::Moon,
        };
        Self {
            target: current.toggled(),
            icon,
        }
    }

    /// Accessible label, e.g. `"Switch to light mode"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Switch to {} mode", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_offer_sun_and_light_when_dark() {
        let affordance = Affordance::for_current(Theme::Dark);
        assert_eq!(affordance.icon, Icon::Sun);
        assert_eq!(affordance.target, Theme::Light);
        assert_eq!(affordance.label(), "Switch to light mode");
    }

    #[test]
    fn should_offer_moon_and_dark_when_light() {
        let affordance = Affordance::for_current(Theme::Light);
        assert_eq!(affordance.icon, Icon::Moon);
        assert_eq!(affordance.target, Theme::Dark);
        assert_eq!(affordance.label(), "Switch to dark mode");
    }
}
