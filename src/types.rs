//! Wire types matching the self.OKRs REST API

use serde::{Deserialize, Serialize};

/// Identity payload from `GET /users/authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub username: String,
    pub email_address: String,
}

/// One tracked subject from `GET /subjects`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// Body for `POST /users/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_address: String,
    pub password: String,
}

/// Token payload from `POST /users/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
}

/// Body for `POST /users/signup`.
///
/// The verification field of the registration form never leaves the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email_address: String,
    pub password: String,
}

/// Body for `POST /users/sendPasswordReset`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub email_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_reads_camel_case_keys() {
        let user: AuthenticatedUser =
            serde_json::from_str(r#"{"username":"marta","emailAddress":"marta@example.com"}"#)
                .expect("should deserialize");

        assert_eq!(user.username, "marta");
        assert_eq!(user.email_address, "marta@example.com");
    }

    #[test]
    fn test_signup_request_never_carries_the_verification_field() {
        let request = SignupRequest {
            username: "marta".to_string(),
            email_address: "marta@example.com".to_string(),
            password: "correct horse".to_string(),
        };

        let json = serde_json::to_string(&request).expect("should serialize");

        assert!(json.contains(r#""emailAddress":"marta@example.com""#));
        assert!(json.contains(r#""username":"marta""#));
        assert!(!json.contains("passwordVerification"));
    }

    #[test]
    fn test_password_reset_request_uses_the_backend_field_name() {
        let request = PasswordResetRequest {
            email_address: "marta@example.com".to_string(),
        };

        let json = serde_json::to_string(&request).expect("should serialize");

        assert_eq!(json, r#"{"emailAddress":"marta@example.com"}"#);
    }

    #[test]
    fn test_auth_response_reads_access_token() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"accessToken":"abc.def.ghi"}"#).expect("should deserialize");

        assert_eq!(response.access_token, "abc.def.ghi");
    }

    #[test]
    fn test_subject_list_deserializes() {
        let subjects: Vec<Subject> =
            serde_json::from_str(r#"[{"id":1,"name":"Health"},{"id":2,"name":"Career"}]"#)
                .expect("should deserialize");

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[1].name, "Career");
    }
}
