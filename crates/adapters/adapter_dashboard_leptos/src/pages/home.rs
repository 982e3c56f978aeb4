use leptos::prelude::*;
use openship_domain::manifesto::{self, PRINCIPLES};

/// The manifesto.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="manifesto">
            <p class="eyebrow">{manifesto::EYEBROW}</p>
            <h1>{manifesto::HEADLINE}</h1>

            <p>{manifesto::INTRO}</p>

            <ol class="principles">
                {PRINCIPLES
                    .iter()
                    .map(|principle| {
                        view! {
                            <li>
                                <h2>{principle.title}</h2>
                                <p>{principle.text}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <p class="loop">{manifesto::LOOP}</p>
        </main>
    }
}
