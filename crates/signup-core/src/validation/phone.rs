//! UK mobile number validation

use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0\s*7").expect("mobile prefix pattern"));

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0\s*7\s*([0-9]\s*){9}$").expect("mobile pattern"));

pub const MOBILE_DIGITS: usize = 11;

/// Rules in order: required, `07` prefix, digit count, full shape
pub fn validate_mobile(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Mobile phone is required".to_string());
    }

    if !MOBILE_PREFIX_REGEX.is_match(value) {
        return Err("Mobile number must start with 07".to_string());
    }

    let digits = value.chars().filter(|c| !c.is_whitespace()).count();
    if digits != MOBILE_DIGITS {
        return Err(format!("Mobile number must be {} digits in total", MOBILE_DIGITS));
    }

    if !MOBILE_REGEX.is_match(value) {
        return Err("Please enter a valid UK mobile number".to_string());
    }

    Ok(())
}
