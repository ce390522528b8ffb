// signup-form - Registration flow for the partner sign-up page
// Field events in, validation state and one submission out

pub mod config;
pub mod controller;
pub mod gateway;
pub mod postcode;
pub mod redirect;
pub mod state;

pub use config::FormConfig;
pub use controller::{FormController, SubmitResult, FORM_ERROR};
pub use gateway::{GatewayError, HttpGateway, SubmissionGateway};
pub use postcode::PostcodeSuggestions;
pub use redirect::{Navigator, RedirectHandle};
pub use state::{FormState, SubmissionOutcome};

// Re-export the shared vocabulary
pub use signup_core::{ErrorKey, Field, FieldValue, Partner, PartnerSubmission};
