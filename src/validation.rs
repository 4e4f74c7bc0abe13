//! Field validation shared by the auth screens
//!
//! Error values are plain strings; an empty string means the field passed
//! the last validation pass. Each screen's errors are recomputed wholesale
//! on submit, never merged.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("valid email pattern")
});

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Empty when `value` is a well-formed email address.
pub fn email_error(value: &str) -> String {
    if value.is_empty() {
        "Email address is required".to_string()
    } else if !EMAIL_PATTERN.is_match(value) {
        "Please enter a valid email address".to_string()
    } else {
        String::new()
    }
}

/// Registration form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email_address: String,
    pub password: String,
    pub password_verification: String,
}

/// Per-field messages for the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub username: String,
    pub email_address: String,
    pub password: String,
    pub password_verification: String,
}

impl RegistrationErrors {
    /// True when every field passed.
    pub fn is_clean(&self) -> bool {
        self.username.is_empty()
            && self.email_address.is_empty()
            && self.password.is_empty()
            && self.password_verification.is_empty()
    }
}

pub fn validate_registration(form: &RegistrationForm) -> RegistrationErrors {
    let mut errors = RegistrationErrors::default();

    errors.email_address = email_error(&form.email_address);

    if form.username.is_empty() {
        errors.username = "Username is required".to_string();
    } else if form.username.chars().count() < MIN_USERNAME_LENGTH {
        errors.username = format!(
            "Username must be at least {} characters long",
            MIN_USERNAME_LENGTH
        );
    }

    if form.password.is_empty() {
        errors.password = "Password is required".to_string();
    } else if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.password = format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        );
    }

    if form.password_verification.is_empty() {
        errors.password_verification = "Please re-enter the password".to_string();
    } else if form.password != form.password_verification {
        errors.password_verification = "Passwords don't match".to_string();
    }

    errors
}

/// Login form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email_address: String,
    pub password: String,
}

/// Per-field messages for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email_address: String,
    pub password: String,
}

impl LoginErrors {
    pub fn is_clean(&self) -> bool {
        self.email_address.is_empty() && self.password.is_empty()
    }
}

pub fn validate_login(form: &LoginForm) -> LoginErrors {
    let mut errors = LoginErrors::default();

    errors.email_address = email_error(&form.email_address);

    if form.password.is_empty() {
        errors.password = "Password is required".to_string();
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            username: "marta".to_string(),
            email_address: "marta@example.com".to_string(),
            password: "correct horse".to_string(),
            password_verification: "correct horse".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_yields_no_errors() {
        assert!(validate_registration(&valid_form()).is_clean());
    }

    #[test]
    fn test_email_pattern_accepts_common_addresses() {
        for address in [
            "user@example.com",
            "first.last@mail.co",
            "a_b@x-y.org",
            "u123@sub.domain.net",
        ] {
            assert!(
                email_error(address).is_empty(),
                "expected {} to validate",
                address
            );
        }
    }

    #[test]
    fn test_email_pattern_rejects_malformed_addresses() {
        for address in [
            "bad",
            "user@",
            "@example.com",
            "user@example",
            "user@example.c",
            "user name@example.com",
        ] {
            assert_eq!(
                email_error(address),
                "Please enter a valid email address",
                "expected {} to be rejected",
                address
            );
        }
    }

    #[test]
    fn test_missing_email_reports_required() {
        assert_eq!(email_error(""), "Email address is required");
    }

    #[test]
    fn test_username_shorter_than_three_chars_is_rejected() {
        let mut form = valid_form();
        form.username = "ab".to_string();

        let errors = validate_registration(&form);

        assert_eq!(errors.username, "Username must be at least 3 characters long");

        form.username = "abc".to_string();
        assert!(validate_registration(&form).username.is_empty());
    }

    #[test]
    fn test_password_shorter_than_eight_chars_is_rejected() {
        let mut form = valid_form();
        form.password = "seven77".to_string();
        form.password_verification = "seven77".to_string();

        let errors = validate_registration(&form);

        assert_eq!(errors.password, "Password must be at least 8 characters long");

        form.password = "eight888".to_string();
        form.password_verification = "eight888".to_string();
        assert!(validate_registration(&form).password.is_empty());
    }

    #[test]
    fn test_mismatched_verification_is_rejected() {
        let mut form = valid_form();
        form.password_verification = "something else".to_string();

        let errors = validate_registration(&form);

        assert_eq!(errors.password_verification, "Passwords don't match");
    }

    #[test]
    fn test_every_field_invalid_reports_every_field() {
        let form = RegistrationForm {
            username: "ab".to_string(),
            email_address: "bad".to_string(),
            password: "short".to_string(),
            password_verification: "x".to_string(),
        };

        let errors = validate_registration(&form);

        assert!(!errors.username.is_empty());
        assert!(!errors.email_address.is_empty());
        assert!(!errors.password.is_empty());
        assert!(!errors.password_verification.is_empty());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login(&LoginForm::default());

        assert_eq!(errors.email_address, "Email address is required");
        assert_eq!(errors.password, "Password is required");
    }

    #[test]
    fn test_login_with_valid_fields_passes() {
        let form = LoginForm {
            email_address: "marta@example.com".to_string(),
            password: "correct horse".to_string(),
        };

        assert!(validate_login(&form).is_clean());
    }
}
