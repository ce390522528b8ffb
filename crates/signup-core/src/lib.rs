//! # signup-core
//!
//! Shared vocabulary of the partner registration flow.
//!
//! The same rule table backs the in-browser form controller (`signup-form`)
//! and the submission sink (`signup-server`), so a record accepted by one is
//! accepted by the other.
//!
//! ```rust
//! use signup_core::{validate, Field, FieldValue};
//!
//! assert!(validate(Field::MobilePhone, &FieldValue::text("07123456789")).is_ok());
//! assert_eq!(
//!     validate(Field::MobilePhone, &FieldValue::text("12345")),
//!     Err("Mobile number must start with 07".to_string()),
//! );
//! ```

pub mod field;
pub mod model;
pub mod validation;

pub use field::{ErrorKey, Field, FieldValue};
pub use model::{FieldError, Partner, PartnerSubmission};
pub use validation::{validate, validate_services, Rule, Validator, SERVICES_MESSAGE};
