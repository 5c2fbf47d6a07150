//! Input validation for client data
//!
//! Stateless checks run before a client is registered. Checks run in a fixed
//! order and the first failure is reported as [`BankError::Validation`].

pub mod cnp;

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BankError, BankResult};
use crate::models::Client;

pub use cnp::{cnp_control_digit, validate_cnp, CNP_LENGTH};

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const PHONE_PATTERN: &str = r"^[0-9]{10}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// Check an email address against `local@domain.tld`
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Check a phone number: exactly ten digits
pub fn validate_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Validate a client whose personal identifier is still in plaintext
pub fn validate_client(client: &Client) -> BankResult<()> {
    if client.firstname.trim().is_empty() || client.lastname.trim().is_empty() {
        return Err(BankError::Validation(
            "Firstname and lastname can not be empty".into(),
        ));
    }

    if !validate_email(&client.email) {
        return Err(BankError::Validation(format!(
            "Invalid email: {}",
            client.email
        )));
    }

    if !validate_phone(&client.phone) {
        return Err(BankError::Validation(format!(
            "Invalid phone number: {}",
            client.phone
        )));
    }

    if !validate_cnp(&client.personal_id) {
        return Err(BankError::Validation("Invalid CNP".into()));
    }

    if !client.gdpr_accepted {
        return Err(BankError::Validation(
            "Client needs to accept the gdpr".into(),
        ));
    }

    Ok(())
}

/// Validate a client that may be absent
pub fn validate_optional(client: Option<&Client>) -> BankResult<()> {
    match client {
        Some(client) => validate_client(client),
        None => Err(BankError::Validation("Empty client.".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientRegistration;

    fn valid_client() -> Client {
        ClientRegistration {
            firstname: "Ana".into(),
            lastname: "Pop".into(),
            email: "ana.pop@example.com".into(),
            phone: "0722123456".into(),
            cnp: "2961215040023".into(),
            password: "secret".into(),
            gdpr_accepted: true,
        }
        .to_client()
    }

    fn message(result: BankResult<()>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_valid_client() {
        assert!(validate_client(&valid_client()).is_ok());
    }

    #[test]
    fn test_absent_client() {
        let err = validate_optional(None).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Empty client"));
        assert!(validate_optional(Some(&valid_client())).is_ok());
    }

    #[test]
    fn test_empty_names() {
        let mut client = valid_client();
        client.firstname = "   ".into();
        assert!(message(validate_client(&client)).contains("Firstname and lastname"));

        let mut client = valid_client();
        client.lastname = String::new();
        assert!(validate_client(&client).is_err());
    }

    #[test]
    fn test_email_patterns() {
        assert!(validate_email("a@b.ro"));
        assert!(validate_email("first.last+tag@mail.example.com"));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@b.c"));
        assert!(!validate_email(""));

        let mut client = valid_client();
        client.email = "broken".into();
        assert!(message(validate_client(&client)).contains("Invalid email: broken"));
    }

    #[test]
    fn test_phone_patterns() {
        assert!(validate_phone("0722123456"));
        assert!(!validate_phone("072212345"));
        assert!(!validate_phone("07221234567"));
        assert!(!validate_phone("07221x3456"));
        assert!(!validate_phone("+40722123456"));

        let mut client = valid_client();
        client.phone = "123".into();
        assert!(message(validate_client(&client)).contains("Invalid phone number"));
    }

    #[test]
    fn test_invalid_cnp() {
        let mut client = valid_client();
        client.personal_id = "2961215040024".into();
        assert_eq!(
            message(validate_client(&client)),
            "Validation error: Invalid CNP"
        );
    }

    #[test]
    fn test_gdpr_required() {
        let mut client = valid_client();
        client.gdpr_accepted = false;
        assert!(message(validate_client(&client)).contains("gdpr"));
    }

    #[test]
    fn test_first_failure_reported() {
        let mut client = valid_client();
        client.email = "bad".into();
        client.gdpr_accepted = false;
        assert!(message(validate_client(&client)).contains("Invalid email"));
    }
}
