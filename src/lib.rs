//! self.OKRs web client
//!
//! Client-side-rendered Leptos app: authentication screens plus the
//! dashboard, talking JSON to the self.OKRs REST backend.

pub mod api;
pub mod components;
pub mod flow;
pub mod pages;
pub mod state;
pub mod types;
pub mod validation;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{DashboardPage, ForgotPasswordPage, LoginPage, RegisterPage};
use state::{Session, SessionAuthority, DEFAULT_BASE_API_URL};

/// Root component: session contexts plus routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(DEFAULT_BASE_API_URL);
    provide_context(session);
    provide_context(SessionAuthority::new(session));

    view! {
        <Router>
            <div class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/forgotPassword") view=ForgotPasswordPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 fallback.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/login">"Go to sign in"</a>
        </main>
    }
}
