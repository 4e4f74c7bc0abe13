//! Loading indicators

use leptos::prelude::*;

/// Inline activity bar for submit buttons.
#[component]
pub fn LoadingBar() -> impl IntoView {
    view! { <div class="loading-bar" aria-label="Loading"></div> }
}

/// Placeholder block shown while content loads.
#[component]
pub fn Skeleton(#[prop(default = "skeleton")] class: &'static str) -> impl IntoView {
    view! { <div class=class></div> }
}
