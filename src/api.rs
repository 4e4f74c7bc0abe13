//! REST client for the self.OKRs backend
//!
//! Two request flavors: bare calls used before a session exists (login,
//! signup, password reset) and authenticated calls that attach the
//! session's bearer token (identity check, subjects).

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::types::{
    AuthResponse, AuthenticatedUser, LoginRequest, PasswordResetRequest, SignupRequest, Subject,
};

/// A failed REST call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The call produced no usable response.
    #[error("no response from server: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Where a failed call should surface in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// No response, or the server itself failed; show the generic retry banner.
    ServerUnreachable,
    /// The backend refused the email address; the message belongs on that field.
    EmailAddress(String),
    /// Any other rejection; the raw body is shown as a banner.
    Other(String),
}

/// Maps a failed call onto the screen surface that should display it.
///
/// The backend reports domain rejections as free text, so email-field
/// errors are recognized by substring. The heuristic lives here and
/// nowhere else.
pub fn classify(error: &ApiError) -> Rejection {
    match error {
        ApiError::Network(_) => Rejection::ServerUnreachable,
        ApiError::Rejected { status, .. } if *status >= 500 => Rejection::ServerUnreachable,
        ApiError::Rejected { body, .. } if body.contains("email") => {
            Rejection::EmailAddress(body.clone())
        }
        ApiError::Rejected { body, .. } => Rejection::Other(body.clone()),
    }
}

/// Reads a non-success response into [`ApiError::Rejected`].
async fn rejected(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Rejected { status, body }
}

/// GET returning JSON, with the session's bearer token attached when present.
async fn get_with_auth<T: DeserializeOwned>(url: &str, token: Option<String>) -> Result<T, ApiError> {
    let request = match &token {
        Some(token) => Request::get(url).header("Authorization", &format!("Bearer {}", token)),
        None => Request::get(url),
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(rejected(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("unreadable response: {}", e)))
}

/// POST with a JSON body, parsing a JSON response.
async fn post_json<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let response = send_post(url, body).await?;

    response
        .json::<R>()
        .await
        .map_err(|e| ApiError::Network(format!("unreadable response: {}", e)))
}

/// POST with a JSON body; the success body is free text and is discarded.
async fn post_for_effect<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    send_post(url, body).await.map(|_| ())
}

async fn send_post<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Network(format!("unserializable request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(rejected(response).await);
    }

    Ok(response)
}

/// Who the current token belongs to.
pub async fn authenticated_user(
    base_url: &str,
    token: Option<String>,
) -> Result<AuthenticatedUser, ApiError> {
    let url = format!("{}/api/users/authenticated", base_url);
    get_with_auth(&url, token).await
}

/// The signed-in user's subjects.
pub async fn subjects(base_url: &str, token: Option<String>) -> Result<Vec<Subject>, ApiError> {
    let url = format!("{}/api/subjects", base_url);
    get_with_auth(&url, token).await
}

/// Exchanges credentials for an access token.
pub async fn login(base_url: &str, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let url = format!("{}/api/users/login", base_url);
    post_json(&url, request).await
}

/// Creates a new account.
pub async fn signup(base_url: &str, request: &SignupRequest) -> Result<(), ApiError> {
    let url = format!("{}/api/users/signup", base_url);
    post_for_effect(&url, request).await
}

/// Asks the backend to mail a password-reset link.
pub async fn send_password_reset(
    base_url: &str,
    request: &PasswordResetRequest,
) -> Result<(), ApiError> {
    let url = format!("{}/api/users/sendPasswordReset", base_url);
    post_for_effect(&url, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_with(status: u16, body: &str) -> ApiError {
        ApiError::Rejected {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_missing_response_is_server_class() {
        let error = ApiError::Network("connection refused".to_string());

        assert_eq!(classify(&error), Rejection::ServerUnreachable);
    }

    #[test]
    fn test_5xx_is_server_class_regardless_of_body() {
        for status in [500, 502, 503] {
            let error = rejected_with(status, "email service is down");

            assert_eq!(
                classify(&error),
                Rejection::ServerUnreachable,
                "status {} should be server-class",
                status
            );
        }
    }

    #[test]
    fn test_email_bearing_body_maps_to_the_email_field() {
        let error = rejected_with(409, "An account with this email address already exists");

        assert_eq!(
            classify(&error),
            Rejection::EmailAddress("An account with this email address already exists".to_string())
        );
    }

    #[test]
    fn test_other_4xx_bodies_surface_verbatim() {
        let error = rejected_with(400, "Username is already taken");

        assert_eq!(
            classify(&error),
            Rejection::Other("Username is already taken".to_string())
        );
    }

    #[test]
    fn test_499_is_not_server_class() {
        let error = rejected_with(499, "client closed request");

        assert_eq!(
            classify(&error),
            Rejection::Other("client closed request".to_string())
        );
    }
}
