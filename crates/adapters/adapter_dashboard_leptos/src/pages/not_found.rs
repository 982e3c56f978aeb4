use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="manifesto not-found">
            <h1>"Nothing shipped here"</h1>
            <p>
                <a href="/">"Back to the manifesto"</a>
            </p>
        </main>
    }
}
