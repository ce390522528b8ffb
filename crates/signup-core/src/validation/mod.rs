// File: src/validation/mod.rs
// Purpose: Per-field rule table and the cross-field services rule

use crate::field::{ErrorKey, Field, FieldValue};
use crate::model::PartnerSubmission;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub mod email;
pub mod phone;
pub mod string;

use string::{validate_alphanumeric, validate_max_length, validate_min_length, validate_required};

pub const SERVICES_MESSAGE: &str = "At least one service must be selected";

/// A pure rule for one field: Ok, or the message to show next to it
pub type Rule = fn(&FieldValue) -> Result<(), String>;

static STANDARD: Lazy<Validator> = Lazy::new(Validator::standard);

/// Validate a single field against the standard rule table
pub fn validate(field: Field, value: &FieldValue) -> Result<(), String> {
    STANDARD.validate(field, value)
}

/// Cross-field rule: at least one of the two services must be chosen
pub fn validate_services(values: &PartnerSubmission) -> Result<(), String> {
    if values.pay_later || values.pay_now {
        Ok(())
    } else {
        Err(SERVICES_MESSAGE.to_string())
    }
}

/// Table mapping each field to its rule
#[derive(Clone)]
pub struct Validator {
    rules: BTreeMap<Field, Rule>,
}

impl Validator {
    /// Rules of the registration form
    pub fn standard() -> Self {
        let mut rules: BTreeMap<Field, Rule> = BTreeMap::new();
        rules.insert(Field::Name, name_rule);
        rules.insert(Field::Company, company_rule);
        rules.insert(Field::MobilePhone, mobile_rule);
        rules.insert(Field::EmailAddress, email_rule);
        rules.insert(Field::Postcode, postcode_rule);
        rules.insert(Field::PayLater, flag_rule);
        rules.insert(Field::PayNow, flag_rule);
        Self { rules }
    }

    /// Replace the rule of one field
    pub fn with_rule(mut self, field: Field, rule: Rule) -> Self {
        self.rules.insert(field, rule);
        self
    }

    /// Fields without a rule are always valid
    pub fn validate(&self, field: Field, value: &FieldValue) -> Result<(), String> {
        match self.rules.get(&field) {
            Some(rule) => rule(value),
            None => Ok(()),
        }
    }

    /// Every field independently plus the services rule; all failures are kept
    pub fn validate_all(&self, values: &PartnerSubmission) -> BTreeMap<ErrorKey, String> {
        let mut errors = BTreeMap::new();

        for field in Field::ALL {
            if let Err(message) = self.validate(field, &values.get(field)) {
                errors.insert(ErrorKey::Field(field), message);
            }
        }

        if let Err(message) = validate_services(values) {
            errors.insert(ErrorKey::Services, message);
        }

        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::standard()
    }
}

fn text<'a>(value: &'a FieldValue, label: &str) -> Result<&'a str, String> {
    value
        .as_text()
        .ok_or_else(|| format!("{} must be text", label))
}

fn name_rule(value: &FieldValue) -> Result<(), String> {
    let s = text(value, "Name")?;
    validate_required(s, "Name")?;
    validate_max_length(s, 255, "Name")?;
    validate_alphanumeric(s, "Name")
}

fn company_rule(value: &FieldValue) -> Result<(), String> {
    let s = text(value, "Company")?;
    validate_required(s, "Company")?;
    validate_max_length(s, 255, "Company")
}

fn mobile_rule(value: &FieldValue) -> Result<(), String> {
    let s = text(value, "Mobile phone")?;
    phone::validate_mobile(s)
}

fn email_rule(value: &FieldValue) -> Result<(), String> {
    let s = text(value, "Email address")?;
    validate_required(s, "Email address")?;
    validate_min_length(s, 5, "Email")?;
    validate_max_length(s, 255, "Email")?;
    if email::is_valid_email(s) {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

fn postcode_rule(value: &FieldValue) -> Result<(), String> {
    let s = text(value, "Postcode")?;
    validate_required(s, "Postcode")?;
    validate_max_length(s, 30, "Postcode")?;
    validate_alphanumeric(s, "Postcode")
}

fn flag_rule(value: &FieldValue) -> Result<(), String> {
    match value {
        FieldValue::Flag(_) => Ok(()),
        FieldValue::Text(_) => Err("Must be true or false".to_string()),
    }
}
