use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{DairyError, DairyResult};

/// Field name -> message for every rule a submitted form breaks.
/// An empty map means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` under `field` when a rule produced one.
    pub fn check(&mut self, field: &'static str, message: Option<String>) -> &mut Self {
        if let Some(msg) = message {
            self.0.insert(field, msg);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_result(self) -> DairyResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DairyError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// A submitted form. `normalize` runs first (e.g. upper-casing a vehicle
/// number), then every field rule is evaluated.
pub trait FormInput: Sized {
    fn normalize(&mut self) {}

    fn field_errors(&self) -> FieldErrors;

    fn into_valid(mut self) -> DairyResult<Self> {
        self.normalize();
        self.field_errors().into_result()?;
        Ok(self)
    }
}

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("static validation pattern"))
}

fn person_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[A-Za-z]+[0-9]{4}$")
}

fn employee_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[A-Z]{3}[0-9]{4}$")
}

fn vehicle_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[A-Z]{2}[0-9]{2}[A-Z]{2}[0-9]{4}$")
}

fn sample_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^SAMPLE[0-9]{6}$")
}

fn batch_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^BATCH[0-9]{4}$")
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[A-Za-z\s]+$")
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[0-9]{10}$")
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[0-9]+(\.[0-9]*)?$")
}

fn fail_unless(ok: bool, message: &str) -> Option<String> {
    if ok {
        None
    } else {
        Some(message.to_string())
    }
}

/// Farmer and other person ids: letters then exactly four digits.
pub fn validate_person_id(value: &str) -> Option<String> {
    fail_unless(
        person_id_re().is_match(value),
        "ID must be letters followed by 4 digits",
    )
}

pub fn validate_employee_id(value: &str) -> Option<String> {
    fail_unless(
        employee_id_re().is_match(value),
        "Employee ID must be 3 uppercase letters followed by 4 digits",
    )
}

pub fn normalize_vehicle_number(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Expects an already upper-cased registration (see `normalize_vehicle_number`).
pub fn validate_vehicle_number(value: &str) -> Option<String> {
    fail_unless(
        vehicle_re().is_match(value),
        "Vehicle number must be in the format AA00AA0000",
    )
}

pub fn validate_bill_id(value: &str) -> Option<String> {
    fail_unless(
        employee_id_re().is_match(value),
        "Bill ID must be 3 uppercase letters followed by 4 digits",
    )
}

pub fn validate_sample_id(value: &str) -> Option<String> {
    fail_unless(
        sample_id_re().is_match(value),
        "Sample ID must be SAMPLE followed by 6 digits",
    )
}

pub fn validate_batch_id(value: &str) -> Option<String> {
    fail_unless(
        batch_id_re().is_match(value),
        "Batch ID must be BATCH followed by 4 digits",
    )
}

pub fn validate_name(value: &str) -> Option<String> {
    fail_unless(
        name_re().is_match(value),
        "Name can only contain letters and spaces",
    )
}

pub fn validate_phone(value: &str) -> Option<String> {
    fail_unless(
        phone_re().is_match(value),
        "Phone number must be exactly 10 digits",
    )
}

pub fn validate_email(value: &str) -> Option<String> {
    fail_unless(
        email_re().is_match(value),
        "Please enter a valid email address",
    )
}

/// Digits with an optional single decimal point. A trailing point is
/// accepted so that "12." passes while it is being typed.
pub fn validate_amount(value: &str) -> Option<String> {
    fail_unless(amount_re().is_match(value), "Please enter a valid number")
}

pub fn validate_ph(value: f64) -> Option<String> {
    fail_unless(
        value.is_finite() && (0.0..=14.0).contains(&value),
        "pH must be a number between 0 and 14",
    )
}

pub fn validate_range(value: f64, min: f64, max: f64, label: &str) -> Option<String> {
    if value.is_finite() && value >= min && value <= max {
        None
    } else {
        Some(format!("{} must be between {} and {}", label, min, max))
    }
}

pub fn validate_required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", label))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_number_is_uppercased_then_checked() {
        let normalized = normalize_vehicle_number("ap09cd1234");
        assert_eq!(normalized, "AP09CD1234");
        assert_eq!(validate_vehicle_number(&normalized), None);

        let short = normalize_vehicle_number("AP9CD1234");
        assert_eq!(
            validate_vehicle_number(&short).as_deref(),
            Some("Vehicle number must be in the format AA00AA0000")
        );
    }

    #[test]
    fn test_employee_id_requires_uppercase() {
        assert!(validate_employee_id("eng1234").is_some());
        assert!(validate_employee_id("ENG1234").is_none());
        assert!(validate_employee_id("EN1234").is_some());
        assert!(validate_employee_id("ENGG1234").is_some());
    }

    #[test]
    fn test_person_id_accepts_any_letter_prefix() {
        assert!(validate_person_id("F0001").is_none());
        assert!(validate_person_id("farmer1234").is_none());
        assert!(validate_person_id("1234").is_some());
        assert!(validate_person_id("F12345").is_some());
    }

    #[test]
    fn test_lab_identifiers() {
        assert!(validate_sample_id("SAMPLE123456").is_none());
        assert!(validate_sample_id("SAMPLE12345").is_some());
        assert!(validate_sample_id("sample123456").is_some());
        assert!(validate_batch_id("BATCH0042").is_none());
        assert!(validate_batch_id("BATCH42").is_some());
        assert!(validate_bill_id("INV2024").is_none());
        assert!(validate_bill_id("inv2024").is_some());
    }

    #[test]
    fn test_contact_fields() {
        assert!(validate_name("Ravi Kumar").is_none());
        assert!(validate_name("R2D2").is_some());
        assert!(validate_phone("9876543210").is_none());
        assert!(validate_phone("98765").is_some());
        assert!(validate_email("ravi@dairy.in").is_none());
        assert!(validate_email("ravi@dairy").is_some());
        assert!(validate_email("ravi dairy@x.in").is_some());
    }

    #[test]
    fn test_amount_and_ph() {
        assert!(validate_amount("12").is_none());
        assert!(validate_amount("12.5").is_none());
        assert!(validate_amount("12.").is_none());
        assert!(validate_amount("1.2.3").is_some());
        assert!(validate_amount("-4").is_some());
        assert!(validate_amount("").is_some());

        assert!(validate_ph(6.7).is_none());
        assert!(validate_ph(0.0).is_none());
        assert!(validate_ph(14.0).is_none());
        assert!(validate_ph(14.1).is_some());
        assert!(validate_ph(f64::NAN).is_some());
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert!(validate_amount("\u{ff11}\u{ff10}").is_some());
        assert!(validate_amount("1\u{0660}").is_some());
        assert!(validate_phone("\u{ff11}\u{ff12}\u{ff13}\u{ff14}\u{ff15}\u{ff16}\u{ff17}\u{ff18}\u{ff19}\u{ff10}").is_some());
        assert!(validate_person_id("F\u{0661}\u{0662}\u{0663}\u{0664}").is_some());
        assert!(validate_employee_id("ENG\u{0661}\u{0662}\u{0663}\u{0664}").is_some());
        assert!(validate_sample_id("SAMPLE\u{ff11}23456").is_some());
        assert!(validate_batch_id("BATCH\u{0967}234").is_some());
        assert!(validate_vehicle_number("AP\u{ff10}9CD1234").is_some());
    }

    #[test]
    fn test_field_errors_collects_only_failures() {
        let mut errors = FieldErrors::new();
        errors
            .check("phone", validate_phone("123"))
            .check("email", validate_email("a@b.co"));
        assert!(!errors.is_empty());
        assert!(errors.get("phone").is_some());
        assert!(errors.get("email").is_none());
        assert!(matches!(
            errors.into_result(),
            Err(DairyError::Validation(_))
        ));
    }
}
