//! Dark/light theme toggle button.
//!
//! The page is already themed by the bootstrapper when this mounts, so the
//! controller seeds itself from the `data-theme` attribute and the first
//! render shows the right icon.

use leptos::prelude::*;
use openship_domain::affordance::{Affordance, Icon};

use crate::platform;

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg
            aria-hidden="true"
            viewBox="0 0 24 24"
            width="18"
            height="18"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
        >
            <circle cx="12" cy="12" r="4.25"/>
            <path d="M12 2.75v2.5M12 18.75v2.5M21.25 12h-2.5M5.25 12h-2.5M18.55 5.45l-1.8 1.8M7.25 16.75l-1.8 1.8M18.55 18.55l-1.8-1.8M7.25 7.25l-1.8-1.8"/>
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg
            aria-hidden="true"
            viewBox="0 0 24 24"
            width="18"
            height="18"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
        >
            <path d="M20 14.2a8.4 8.4 0 1 1-10.2-10.2A7 7 0 0 0 20 14.2Z"/>
        </svg>
    }
}

/// A toggle button that switches between light and dark themes.
///
/// Re-resolves the stored/system preference once after mount. Each click
/// flips the theme, applies it and persists it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let controller = StoredValue::new(platform::theme_controller());
    let theme = RwSignal::new(controller.with_value(|c| c.current()));

    Effect::new(move |_| {
        if let Some(resolved) = controller.try_update_value(|c| c.mount()) {
            theme.set(resolved);
        }
    });

    let toggle = move |_| {
        if let Some(outcome) = controller.try_update_value(|c| c.toggle()) {
            theme.set(outcome.theme);
        }
    };

    let affordance = move || Affordance::for_current(theme.get());

    view! {
        <button
            aria-label=move || affordance().label()
            title=move || affordance().label()
            class="theme-toggle"
            type="button"
            on:click=toggle
        >
            {move || match affordance().icon {
                Icon::Sun => view! { <SunIcon/> }.into_any(),
                Icon::Moon => view! { <MoonIcon/> }.into_any(),
            }}
        </button>
    }
}
