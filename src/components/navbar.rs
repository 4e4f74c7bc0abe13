//! Top navigation bar for signed-in screens

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::{Session, SessionAuthority};

/// Brand, current user, and sign-out control.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let authority = expect_context::<SessionAuthority>();
    let navigate = use_navigate();

    let username = session.username();

    view! {
        <header class="navbar">
            <a href="/dashboard" class="navbar-brand">"self.OKRs"</a>
            <nav class="navbar-actions">
                <Show when=move || !username.get().is_empty()>
                    <span class="navbar-username">{move || username.get()}</span>
                </Show>
                <button
                    class="navbar-signout"
                    on:click=move |_| {
                        authority.clear();
                        navigate("/login", Default::default());
                    }
                >
                    "Sign out"
                </button>
            </nav>
        </header>
    }
}
