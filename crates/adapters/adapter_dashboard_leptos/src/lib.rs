//! # openship-dashboard
//!
//! Client-side rendered Leptos front end for the Open Ship site.
//!
//! `main` runs [`bootstrap_theme`] before mounting [`App`], so `data-theme`
//! is on `<html>` before any component renders.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use openship_domain::theme::Theme;

mod components;
mod pages;
pub mod platform;

use components::ThemeToggle;
use pages::{Home, NotFound};

/// Resolve the initial theme and write it onto `<html>`.
///
/// Must run synchronously before [`App`] is mounted.
pub fn bootstrap_theme() -> Theme {
    platform::theme_bootstrapper().run()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <ThemeToggle/>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=Home/>
            </Routes>
        </Router>
    }
}
