//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Khota Training & Consulting"</h1>
            <p>"Professional courses in internal audit, accounting and finance."</p>
            <a class="home__cta" href="/courses">"Browse courses"</a>
        </section>
    }
}
