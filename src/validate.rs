//! Contact Form Validation
//!
//! Pure field checks; the contact form binds them to input/blur events and
//! renders the returned message inline next to the field.

/// Why a field failed validation. First failing rule wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    MissingRequired,
    InvalidEmail,
    TooShort { min: usize },
}

impl FieldError {
    /// User-facing message for a failed field
    pub fn message(&self, field: &str) -> String {
        match self {
            FieldError::MissingRequired => format!("{} is required", capitalize(field)),
            FieldError::InvalidEmail => "Please enter a valid email address".to_string(),
            FieldError::TooShort { min } => {
                format!(
                    "{} must be at least {} characters long",
                    capitalize(field),
                    min
                )
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Minimum length for a field, applied only to non-empty values
fn min_len(field: &str) -> Option<usize> {
    match field {
        "name" => Some(2),
        "subject" => Some(3),
        "message" => Some(10),
        _ => None,
    }
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and at least
/// one `.` with non-empty parts after the `@`.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a single field value. Rules run in order; the first failure wins.
pub fn validate_field(
    field: &str,
    value: &str,
    is_email: bool,
    required: bool,
) -> Result<(), FieldError> {
    let value = value.trim();

    if required && value.is_empty() {
        return Err(FieldError::MissingRequired);
    }
    if is_email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    if let Some(min) = min_len(field) {
        if !value.is_empty() && value.chars().count() < min {
            return Err(FieldError::TooShort { min });
        }
    }
    Ok(())
}

/// Convenience for the contact form: every field is required, `email` is the
/// only email-typed one. Returns the inline annotation text, if any.
pub fn field_error(field: &str, value: &str) -> Option<String> {
    validate_field(field, value, field == "email", true)
        .err()
        .map(|e| e.message(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_and_whitespace() {
        assert_eq!(
            validate_field("name", "", false, true),
            Err(FieldError::MissingRequired)
        );
        assert_eq!(
            validate_field("subject", "   ", false, true),
            Err(FieldError::MissingRequired)
        );
        // Optional fields may stay empty
        assert_eq!(validate_field("company", "", false, false), Ok(()));
    }

    #[test]
    fn email_shapes() {
        assert_eq!(
            validate_field("email", "not-an-email", true, true),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(validate_field("email", "a@b.co", true, true), Ok(()));
        assert_eq!(validate_field("email", "first.last@mail.example.org", true, true), Ok(()));
        for bad in ["a b@c.de", "a@@b.co", "@b.co", "a@b", "a@.co", "a@b."] {
            assert_eq!(
                validate_field("email", bad, true, true),
                Err(FieldError::InvalidEmail),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn minimum_lengths() {
        assert_eq!(
            validate_field("name", "A", false, true),
            Err(FieldError::TooShort { min: 2 })
        );
        assert_eq!(validate_field("name", "Al", false, true), Ok(()));
        assert_eq!(
            validate_field("subject", "Hi", false, true),
            Err(FieldError::TooShort { min: 3 })
        );
        assert_eq!(
            validate_field("message", "Too short", false, true),
            Err(FieldError::TooShort { min: 10 })
        );
        assert_eq!(
            validate_field("message", "Long enough now.", false, true),
            Ok(())
        );
    }

    #[test]
    fn required_failure_wins_over_length() {
        // Empty name is reported as missing, not as too short
        assert_eq!(
            validate_field("name", "", false, true),
            Err(FieldError::MissingRequired)
        );
    }

    #[test]
    fn values_are_trimmed_before_checks() {
        assert_eq!(validate_field("name", "  Al  ", false, true), Ok(()));
        assert_eq!(
            validate_field("name", "  A ", false, true),
            Err(FieldError::TooShort { min: 2 })
        );
    }

    #[test]
    fn messages_name_the_field() {
        assert_eq!(field_error("name", ""), Some("Name is required".to_string()));
        assert_eq!(
            field_error("email", "nope"),
            Some("Please enter a valid email address".to_string())
        );
        assert_eq!(
            field_error("message", "short"),
            Some("Message must be at least 10 characters long".to_string())
        );
        assert_eq!(field_error("subject", "Hello there"), None);
    }
}
