//! Subject list for the dashboard

use leptos::prelude::*;

use crate::components::Skeleton;
use crate::types::Subject;

/// Renders the user's subjects, with placeholders while they load.
#[component]
pub fn Subjects(
    subjects: RwSignal<Vec<Subject>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <section class="subjects">
            <h2 class="subjects-title">"Subjects"</h2>

            <Show when=move || loading.get()>
                <div class="subjects-placeholder">
                    <Skeleton />
                    <Skeleton />
                    <Skeleton />
                </div>
            </Show>

            <Show when=move || !loading.get() && subjects.get().is_empty()>
                <p class="subjects-empty">"No subjects yet."</p>
            </Show>

            <ul class="subjects-list">
                {move || {
                    subjects
                        .get()
                        .into_iter()
                        .map(|subject| view! { <li class="subject-card">{subject.name}</li> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
