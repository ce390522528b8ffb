// File: src/field.rs
// Purpose: Field names, field values and error keys of the registration form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Company,
    MobilePhone,
    EmailAddress,
    Postcode,
    PayLater,
    PayNow,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Company,
        Field::MobilePhone,
        Field::EmailAddress,
        Field::Postcode,
        Field::PayLater,
        Field::PayNow,
    ];

    /// Form-side name (camelCase)
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::MobilePhone => "mobilePhone",
            Field::EmailAddress => "emailAddress",
            Field::Postcode => "postcode",
            Field::PayLater => "payLater",
            Field::PayNow => "payNow",
        }
    }

    /// Name on the wire (snake_case)
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::MobilePhone => "mobile_phone",
            Field::EmailAddress => "email_address",
            Field::Postcode => "postcode",
            Field::PayLater => "pay_later",
            Field::PayNow => "pay_now",
        }
    }

    /// Whether the field is one of the two service checkboxes
    pub fn is_checkbox(self) -> bool {
        matches!(self, Field::PayLater | Field::PayNow)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts both the form name and the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s || field.wire_name() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Current value of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }

    /// Non-empty text or a checked box
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Flag(b) => *b,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Key of an entry in the form's error map
///
/// Besides the fields themselves the map carries the synthetic `services`
/// key (cross-field rule) and the form-level `form` key (submission failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    Field(Field),
    Services,
    Form,
}

impl ErrorKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKey::Field(field) => field.as_str(),
            ErrorKey::Services => "services",
            ErrorKey::Form => "form",
        }
    }
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        ErrorKey::Field(field)
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parses_form_and_wire_names() {
        assert_eq!("mobilePhone".parse::<Field>(), Ok(Field::MobilePhone));
        assert_eq!("mobile_phone".parse::<Field>(), Ok(Field::MobilePhone));
        assert_eq!("pay_now".parse::<Field>(), Ok(Field::PayNow));
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_checkbox_fields() {
        let checkboxes: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_checkbox()).collect();
        assert_eq!(checkboxes, vec![Field::PayLater, Field::PayNow]);
    }

    #[test]
    fn test_is_filled() {
        assert!(FieldValue::text("a").is_filled());
        assert!(!FieldValue::text("   ").is_filled());
        assert!(FieldValue::Flag(true).is_filled());
        assert!(!FieldValue::Flag(false).is_filled());
    }

    #[test]
    fn test_error_key_names() {
        assert_eq!(ErrorKey::from(Field::EmailAddress).as_str(), "emailAddress");
        assert_eq!(ErrorKey::Services.to_string(), "services");
        assert_eq!(ErrorKey::Form.to_string(), "form");
    }
}
