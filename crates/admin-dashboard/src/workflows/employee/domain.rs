use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee as returned by `GET /employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub ctc: Option<f64>,
    pub email: String,
}

/// Body of `POST /employees`.
///
/// `ctc` keeps whatever [`parse_ctc`] produced; a NaN serializes as JSON
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub designation: String,
    pub ctc: f64,
    pub email: String,
}

/// Raw text held by the add-employee form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub designation: String,
    pub ctc: String,
    pub email: String,
}

impl EmployeeDraft {
    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        let slot = match field {
            EmployeeField::Name => &mut self.name,
            EmployeeField::Designation => &mut self.designation,
            EmployeeField::Ctc => &mut self.ctc,
            EmployeeField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn to_new_employee(&self) -> NewEmployee {
        NewEmployee {
            name: self.name.clone(),
            designation: self.designation.clone(),
            ctc: parse_ctc(&self.ctc),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Name,
    Designation,
    Ctc,
    Email,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::Name,
        EmployeeField::Designation,
        EmployeeField::Ctc,
        EmployeeField::Email,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::Designation => "designation",
            EmployeeField::Ctc => "ctc",
            EmployeeField::Email => "email",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Lenient float parsing for the CTC input.
///
/// Leading whitespace is skipped and the longest numeric prefix wins, so
/// `"12abc"` is 12 and `"1e3"` is 1000. Anything without a numeric prefix,
/// including the empty string, is NaN.
pub fn parse_ctc(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        mantissa_digits += cursor - fraction_start;
        end = cursor;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal() {
        assert_eq!(parse_ctc("1200.5"), 1200.5);
        assert_eq!(parse_ctc("  42"), 42.0);
        assert_eq!(parse_ctc("-.5"), -0.5);
        assert_eq!(parse_ctc("7."), 7.0);
    }

    #[test]
    fn empty_and_non_numeric_input_is_nan() {
        assert!(parse_ctc("").is_nan());
        assert!(parse_ctc("   ").is_nan());
        assert!(parse_ctc("lakhs").is_nan());
        assert!(parse_ctc(".").is_nan());
        assert!(parse_ctc("-").is_nan());
    }

    #[test]
    fn uses_longest_numeric_prefix() {
        assert_eq!(parse_ctc("12abc"), 12.0);
        assert_eq!(parse_ctc("1e3"), 1000.0);
        assert_eq!(parse_ctc("2.5e"), 2.5);
        assert_eq!(parse_ctc("3e+2x"), 300.0);
        assert_eq!(parse_ctc("Infinity"), f64::INFINITY);
        assert_eq!(parse_ctc("-Infinity and beyond"), f64::NEG_INFINITY);
        assert!(parse_ctc("inf").is_nan());
    }

    #[test]
    fn nan_ctc_is_sent_as_null() {
        let draft = EmployeeDraft {
            name: "Asha".to_string(),
            designation: String::new(),
            ctc: String::new(),
            email: "asha@example.com".to_string(),
        };
        let body = serde_json::to_value(draft.to_new_employee()).expect("serializes");
        assert_eq!(body["ctc"], serde_json::Value::Null);
        assert_eq!(body["designation"], "");
    }

    #[test]
    fn required_fields_ignore_surrounding_whitespace() {
        let mut draft = EmployeeDraft::default();
        draft.set(EmployeeField::Name, "  ");
        draft.set(EmployeeField::Email, "ops@example.com");
        assert!(!draft.has_required_fields());

        draft.set(EmployeeField::Name, " Ravi ");
        assert!(draft.has_required_fields());
        assert_eq!(draft.to_new_employee().name, " Ravi ");
    }

    #[test]
    fn deserializes_missing_optional_fields() {
        let employee: Employee = serde_json::from_str(
            r#"{"id": 4, "name": "Meera", "email": "meera@example.com", "ctc": null}"#,
        )
        .expect("valid employee json");
        assert_eq!(employee.id, EmployeeId(4));
        assert_eq!(employee.designation, None);
        assert_eq!(employee.ctc, None);
    }
}
