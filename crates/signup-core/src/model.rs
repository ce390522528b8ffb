// File: src/model.rs
// Purpose: Wire records exchanged with the submission sink

use crate::field::{ErrorKey, Field, FieldValue};
use crate::validation::Validator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration values as sent to the sink (snake_case on the wire)
///
/// Also serves as the value store of an in-progress form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerSubmission {
    pub name: String,
    pub company: String,
    pub mobile_phone: String,
    pub email_address: String,
    pub postcode: String,
    pub pay_later: bool,
    pub pay_now: bool,
}

impl PartnerSubmission {
    /// Current value of a field
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Company => FieldValue::Text(self.company.clone()),
            Field::MobilePhone => FieldValue::Text(self.mobile_phone.clone()),
            Field::EmailAddress => FieldValue::Text(self.email_address.clone()),
            Field::Postcode => FieldValue::Text(self.postcode.clone()),
            Field::PayLater => FieldValue::Flag(self.pay_later),
            Field::PayNow => FieldValue::Flag(self.pay_now),
        }
    }

    /// Store a value; fails when the value has the wrong shape for the field
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), String> {
        match (field, value) {
            (Field::Name, FieldValue::Text(s)) => self.name = s,
            (Field::Company, FieldValue::Text(s)) => self.company = s,
            (Field::MobilePhone, FieldValue::Text(s)) => self.mobile_phone = s,
            (Field::EmailAddress, FieldValue::Text(s)) => self.email_address = s,
            (Field::Postcode, FieldValue::Text(s)) => self.postcode = s,
            (Field::PayLater, FieldValue::Flag(b)) => self.pay_later = b,
            (Field::PayNow, FieldValue::Flag(b)) => self.pay_now = b,
            (field, _) if field.is_checkbox() => {
                return Err(format!("{} must be true or false", field))
            }
            (field, _) => return Err(format!("{} must be text", field)),
        }
        Ok(())
    }

    /// Run every field rule and the services rule, keeping all failures
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = Validator::standard()
            .validate_all(self)
            .into_iter()
            .map(|(key, message)| FieldError::new(key, message))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One failed rule, keyed by wire name (or `services`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(key: ErrorKey, message: impl Into<String>) -> Self {
        let field = match key {
            ErrorKey::Field(field) => field.wire_name(),
            other => other.as_str(),
        };
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A stored registration; immutable once the sink has created it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: Uuid,

    #[serde(flatten)]
    pub submission: PartnerSubmission,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Partner {
    /// Assign an id and creation time to an accepted submission
    pub fn create(submission: PartnerSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission,
            created_at: Utc::now(),
        }
    }
}
