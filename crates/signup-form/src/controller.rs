// File: src/controller.rs
// Purpose: Form state controller - change/blur/submit events for one registration attempt

use crate::config::FormConfig;
use crate::gateway::SubmissionGateway;
use crate::postcode::PostcodeSuggestions;
use crate::redirect::{Navigator, RedirectHandle};
use crate::state::{FormState, SubmissionOutcome};
use signup_core::{ErrorKey, Field, FieldValue, Partner, PartnerSubmission, Validator};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Banner shown when the sink could not take the registration
pub const FORM_ERROR: &str = "Failed to submit form. Please try again.";

/// What a call to [`FormController::submit`] did
#[derive(Debug)]
pub enum SubmitResult {
    /// A submission was already outstanding; nothing was sent
    AlreadySubmitting,
    /// The flow was disposed; nothing was sent
    Disposed,
    /// The sink already stored this attempt; nothing was sent
    AlreadySubmitted,
    /// At least one rule failed; nothing was sent
    Invalid(BTreeMap<ErrorKey, String>),
    /// The sink stored the record and a redirect is scheduled
    Succeeded {
        partner: Partner,
        redirect: RedirectHandle,
    },
    /// The sink could not be reached or refused the record
    Failed(String),
}

/// Drives one registration attempt
///
/// All events take `&self`: the state sits behind a mutex that is never held
/// across the gateway call, so a second submit that arrives while the first
/// is outstanding sees `is_submitting` and is turned away.
pub struct FormController {
    state: Arc<Mutex<FormState>>,
    validator: Validator,
    gateway: Arc<dyn SubmissionGateway>,
    navigator: Arc<dyn Navigator>,
    postcodes: PostcodeSuggestions,
    config: FormConfig,
}

impl FormController {
    pub fn new(
        gateway: Arc<dyn SubmissionGateway>,
        navigator: Arc<dyn Navigator>,
        config: FormConfig,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new())),
            validator: Validator::standard(),
            gateway,
            navigator,
            postcodes: PostcodeSuggestions::default(),
            config,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_postcodes(mut self, postcodes: PostcodeSuggestions) -> Self {
        self.postcodes = postcodes;
        self
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    pub fn values(&self) -> PartnerSubmission {
        self.lock().values().clone()
    }

    pub fn errors(&self) -> BTreeMap<ErrorKey, String> {
        self.lock().errors().clone()
    }

    pub fn error(&self, key: impl Into<ErrorKey>) -> Option<String> {
        self.lock().error(key).map(str::to_string)
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().is_submitting()
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.lock().outcome()
    }

    pub fn postcode_suggestions(&self) -> Vec<String> {
        self.lock().postcode_suggestions().to_vec()
    }

    /// Store a new value
    ///
    /// Text fields are validated immediately. Checkbox changes only re-run
    /// the services rule, and only once a services pass has happened.
    /// Fails, leaving the state untouched, if the value has the wrong shape.
    pub fn on_field_change(&self, field: Field, value: impl Into<FieldValue>) -> Result<(), String> {
        let value = value.into();
        let mut state = self.lock();
        state.values_mut().set(field, value)?;
        debug!("change {}", field);

        if field == Field::Postcode {
            let suggestions = self
                .postcodes
                .suggest(&state.values().postcode)
                .map(str::to_string)
                .collect();
            state.set_postcode_suggestions(suggestions);
        }

        if field.is_checkbox() {
            if state.services_checked() {
                state.check_services();
            }
        } else {
            state.check_field(&self.validator, field);
        }

        Ok(())
    }

    /// Validate the field being left; leaving a checkbox also runs the services rule
    pub fn on_field_blur(&self, field: Field, value: impl Into<FieldValue>) -> Result<(), String> {
        let value = value.into();
        let mut state = self.lock();
        state.values_mut().set(field, value)?;
        debug!("blur {}", field);

        if field == Field::Postcode {
            state.hide_postcode_suggestions();
        }

        state.check_field(&self.validator, field);
        if field.is_checkbox() {
            state.check_services();
        }

        Ok(())
    }

    /// Take a postcode from the suggestion list
    pub fn select_postcode(&self, postcode: &str) {
        let mut state = self.lock();
        state.values_mut().postcode = postcode.to_string();
        state.clear_postcode_suggestions();
        state.check_field(&self.validator, Field::Postcode);
    }

    /// Validate everything and, if it all passes, send the record once
    pub async fn submit(&self) -> SubmitResult {
        let submission = {
            let mut state = self.lock();

            if state.is_disposed() {
                return SubmitResult::Disposed;
            }

            if state.is_submitting() {
                debug!("submit ignored: already submitting");
                return SubmitResult::AlreadySubmitting;
            }

            if state.outcome() == SubmissionOutcome::Succeeded {
                debug!("submit ignored: already stored");
                return SubmitResult::AlreadySubmitted;
            }

            state.set_submitting(true);
            state.set_form_error(None);

            if !state.check_all(&self.validator) {
                state.set_submitting(false);
                debug!("submit blocked by {} errors", state.errors().len());
                return SubmitResult::Invalid(state.errors().clone());
            }

            state.values().clone()
        };

        let result = self.gateway.submit(&submission).await;

        let mut state = self.lock();
        state.set_submitting(false);

        match result {
            Ok(partner) => {
                info!("Registration {} stored", partner.id);
                state.set_outcome(SubmissionOutcome::Succeeded);
                drop(state);

                let redirect = RedirectHandle::schedule(
                    &self.state,
                    self.navigator.clone(),
                    self.config.redirect_to.clone(),
                    self.config.redirect_delay(),
                );
                SubmitResult::Succeeded { partner, redirect }
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                state.set_form_error(Some(FORM_ERROR));
                SubmitResult::Failed(e.to_string())
            }
        }
    }

    /// Tear the flow down; a pending redirect becomes a no-op
    pub fn dispose(&self) {
        self.lock().dispose();
    }
}
