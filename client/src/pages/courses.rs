//! Course catalog page.

use leptos::prelude::*;

const COURSES: &[(&str, &str)] = &[
    ("Internal Audit Fundamentals", "Planning, fieldwork and reporting for new auditors."),
    ("Auditors Fellowship", "A guided path towards professional certification."),
    ("Financial Management", "Budgeting, cash flow and management reporting."),
];

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <section class="courses">
            <h1>"Courses"</h1>
            <ul class="courses__list">
                {COURSES
                    .iter()
                    .map(|(title, summary)| {
                        view! {
                            <li class="courses__card">
                                <h2>{*title}</h2>
                                <p>{*summary}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
