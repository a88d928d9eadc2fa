//! Client-side input validation.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;

/// Address pattern of the pull form, applied to the lowercased input.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:@" \t\r\n\x0B\x0C]+(\.[^<>()\[\]\\.,;:@" \t\r\n\x0B\x0C]+)*)|(".+"))"#,
        r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    ))
    .expect("email pattern is valid")
});

/// Validate the optional notification email of a pull request.
///
/// Blank input means "no notification" and is accepted as `None`.
pub fn notification_email(input: &str) -> Result<Option<String>, ValidationError> {
    let email = input.trim();
    if email.is_empty() {
        return Ok(None);
    }
    if EMAIL_PATTERN.is_match(&email.to_lowercase()) {
        Ok(Some(email.to_string()))
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_is_optional() {
        assert_eq!(notification_email(""), Ok(None));
        assert_eq!(notification_email("   "), Ok(None));
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "user@example.org",
            "First.Last@lab.example.co.uk",
            "a+b@sub-domain.example.com",
            "root@[192.168.0.1]",
        ] {
            assert_eq!(notification_email(email), Ok(Some(email.to_string())), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["not-an-email", "user@", "@example.org", "a b@example.org", "user@host"] {
            assert_eq!(
                notification_email(email),
                Err(ValidationError::InvalidEmail(email.to_string())),
                "{email}"
            );
        }
    }
}
