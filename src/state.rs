//! Tab-lifetime session context

use leptos::prelude::*;

use crate::types::AuthenticatedUser;

/// Backend origin; the REST API itself lives under `{base}/api`.
pub const DEFAULT_BASE_API_URL: &str = "http://localhost:8080";

/// Read side of the current session, provided to every screen.
///
/// Holds the verified identity, the transport access token, and the API
/// base configuration. Nothing here outlives the tab.
#[derive(Clone, Copy)]
pub struct Session {
    identity: RwSignal<Option<AuthenticatedUser>>,
    access_token: RwSignal<Option<String>>,
    base_api_url: StoredValue<String>,
}

impl Session {
    pub fn new(base_api_url: impl Into<String>) -> Self {
        Self {
            identity: RwSignal::new(None),
            access_token: RwSignal::new(None),
            base_api_url: StoredValue::new(base_api_url.into()),
        }
    }

    /// Identity of the signed-in user, once the dashboard has verified it.
    pub fn identity(&self) -> Signal<Option<AuthenticatedUser>> {
        self.identity.into()
    }

    /// Display name of the signed-in user; empty until verified.
    pub fn username(&self) -> Signal<String> {
        let identity = self.identity;
        Signal::derive(move || identity.get().map(|user| user.username).unwrap_or_default())
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let access_token = self.access_token;
        Signal::derive(move || access_token.get().is_some())
    }

    /// Current bearer token for authenticated calls.
    pub fn access_token(&self) -> Option<String> {
        self.access_token.get_untracked()
    }

    pub fn base_api_url(&self) -> String {
        self.base_api_url.get_value()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_API_URL)
    }
}

/// Write capability over the session.
///
/// Held by the auth flows and the dashboard bootstrap; every other screen
/// reads through [`Session`]. Identity is written only by the bootstrap,
/// the token only on login and logout.
#[derive(Clone, Copy)]
pub struct SessionAuthority {
    session: Session,
}

impl SessionAuthority {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn store_access_token(&self, token: String) {
        self.session.access_token.set(Some(token));
    }

    pub fn set_identity(&self, user: AuthenticatedUser) {
        self.session.identity.set(Some(user));
    }

    /// Tears the session down: identity and token are both dropped.
    pub fn clear(&self) {
        self.session.identity.set(None);
        self.session.access_token.set(None);
    }
}
