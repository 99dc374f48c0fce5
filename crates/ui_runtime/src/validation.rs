//! Form field validation rules and per-form error bookkeeping.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Input types with dedicated format rules.
pub enum FieldKind {
    Email,
    Tel,
    #[default]
    Other,
}

impl FieldKind {
    /// Maps an `input.type` value.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.trim().to_ascii_lowercase().as_str() {
            "email" => Self::Email,
            "tel" => Self::Tel,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Validation-relevant attributes of a form control.
pub struct FieldSpec {
    pub kind: FieldKind,
    pub required: bool,
    /// Parsed `minlength`; `None` when absent or not a number.
    pub min_length: Option<usize>,
}

impl FieldSpec {
    /// Builds a spec from raw DOM attribute values.
    pub fn from_attributes(input_type: &str, required: bool, minlength: Option<&str>) -> Self {
        Self {
            kind: FieldKind::from_input_type(input_type),
            required,
            min_length: minlength.and_then(parse_leading_int),
        }
    }
}

/// Integer prefix of `raw` after leading whitespace, like `parseInt(raw, 10)`.
fn parse_leading_int(raw: &str) -> Option<usize> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// First failing rule for a field; the display text is shown under the field.
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Minimum {0} characters required")]
    TooShort(usize),
}

/// Validates a raw field value. Rules run in order and the first failure wins.
///
/// # Errors
///
/// Returns the [`FieldError`] for the first rule the trimmed value breaks.
pub fn validate_field(spec: &FieldSpec, raw_value: &str) -> Result<(), FieldError> {
    let value = raw_value.trim();

    if spec.required && value.is_empty() {
        return Err(FieldError::Required);
    }

    if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }

    if spec.kind == FieldKind::Tel && !value.is_empty() && !is_valid_phone(value) {
        return Err(FieldError::InvalidPhone);
    }

    if let Some(min_length) = spec.min_length {
        if value.chars().count() < min_length {
            return Err(FieldError::TooShort(min_length));
        }
    }

    Ok(())
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot inside the domain part.
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
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

/// Exactly ten digits once every non-digit is stripped.
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == 10
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Current error per field name. A field holds at most one error.
pub struct FormErrors {
    errors: BTreeMap<String, FieldError>,
}

impl FormErrors {
    /// Validates `raw_value` and records or clears the field's error.
    pub fn check(&mut self, field: &str, spec: &FieldSpec, raw_value: &str) -> bool {
        match validate_field(spec, raw_value) {
            Ok(()) => {
                self.clear(field);
                true
            }
            Err(error) => {
                self.errors.insert(field.to_string(), error);
                false
            }
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Validates every field, recording errors, and returns whether the form may submit.
///
/// Every field is checked even after a failure so all errors are shown at once.
pub fn validate_form<'a>(
    errors: &mut FormErrors,
    fields: impl IntoIterator<Item = (&'a str, &'a FieldSpec, &'a str)>,
) -> bool {
    let mut valid = true;
    for (name, spec, value) in fields {
        if !errors.check(name, spec, value) {
            valid = false;
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spec(input_type: &str, required: bool, minlength: Option<&str>) -> FieldSpec {
        FieldSpec::from_attributes(input_type, required, minlength)
    }

    #[test]
    fn required_empty_field_fails_with_a_single_error() {
        let mut errors = FormErrors::default();
        let required = spec("text", true, None);

        assert!(!errors.check("name", &required, "   "));
        assert!(!errors.check("name", &required, ""));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.error("name").map(ToString::to_string).as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn email_rule_rejects_malformed_and_accepts_valid() {
        let email = spec("email", false, None);

        assert_eq!(
            validate_field(&email, "player@arena"),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(validate_field(&email, " player@arena.gg "), Ok(()));
        assert_eq!(validate_field(&email, ""), Ok(()));
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn phone_rule_counts_digits_after_stripping_punctuation() {
        let tel = spec("tel", false, None);

        assert_eq!(validate_field(&tel, "(987) 654-3210"), Ok(()));
        assert_eq!(validate_field(&tel, "+91 98765 43210"), Err(FieldError::InvalidPhone));
        assert_eq!(validate_field(&tel, "12345"), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn required_rule_wins_over_format_rules() {
        let tel = spec("tel", true, Some("10"));
        assert_eq!(validate_field(&tel, ""), Err(FieldError::Required));
    }

    #[test]
    fn min_length_uses_trimmed_characters() {
        let password = spec("password", false, Some("8"));

        assert_eq!(validate_field(&password, "  short  "), Err(FieldError::TooShort(8)));
        assert_eq!(
            FieldError::TooShort(8).to_string(),
            "Minimum 8 characters required"
        );
        assert_eq!(validate_field(&password, "long enough"), Ok(()));
    }

    #[test]
    fn unparsable_minlength_is_ignored() {
        assert_eq!(spec("text", false, Some("abc")).min_length, None);
        assert_eq!(spec("text", false, Some(" 6px")).min_length, Some(6));
    }

    #[test]
    fn passing_check_clears_previous_error() {
        let mut errors = FormErrors::default();
        let email = spec("email", true, None);

        errors.check("email", &email, "nope");
        assert!(errors.error("email").is_some());

        assert!(errors.check("email", &email, "ok@site.com"));
        assert!(errors.is_empty());
    }

    #[test]
    fn form_gate_blocks_when_any_field_fails_and_reports_all() {
        let mut errors = FormErrors::default();
        let name = spec("text", true, None);
        let email = spec("email", true, None);
        let phone = spec("tel", false, None);

        let ok = validate_form(
            &mut errors,
            [
                ("name", &name, ""),
                ("email", &email, "bad"),
                ("phone", &phone, "9876543210"),
            ],
        );

        assert!(!ok);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.error("phone"), None);
    }
}
