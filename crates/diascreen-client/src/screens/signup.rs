use tracing::warn;

use diascreen_core::models::profile::Gender;
use diascreen_core::models::signup::SignupForm;
use diascreen_core::validation::{ErrorMap, Field, validate_signup};
use diascreen_remote::RemoteError;
use diascreen_remote::wire::SignupRequest;

use crate::error::SubmitError;
use crate::request::{RequestId, RequestState, Ticket};

pub const SIGNUP_SUCCEEDED_MESSAGE: &str = "Signup successful!";
pub const SIGNUP_FAILED_MESSAGE: &str = "Error signing up.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Registered,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct SignupScreen {
    form: SignupForm,
    errors: ErrorMap,
    alert: Option<String>,
    request: RequestState,
}

impl SignupScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.errors.clear(Field::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
        self.errors.clear(Field::Password);
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
        self.errors.clear(Field::FirstName);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
        self.errors.clear(Field::LastName);
    }

    pub fn set_gender(&mut self, value: Option<Gender>) {
        self.form.gender = value;
        self.errors.clear(Field::Gender);
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.form.age = value.into();
        self.errors.clear(Field::Age);
    }

    pub fn set_nationality(&mut self, value: impl Into<String>) {
        self.form.nationality = value.into();
        self.errors.clear(Field::Nationality);
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Message from the last failed attempt, shown verbatim.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    pub fn begin_submit(&mut self) -> Result<Ticket<SignupRequest>, SubmitError> {
        if self.request.is_pending() {
            return Err(SubmitError::InFlight);
        }

        self.alert = None;
        self.errors = validate_signup(&self.form);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let payload = SignupRequest::from_form(&self.form)?;
        let id = self.request.begin()?;
        Ok(Ticket { id, payload })
    }

    /// Apply the service's answer. `None` if `id` is not the outstanding
    /// request.
    pub fn finish_submit(
        &mut self,
        id: RequestId,
        outcome: Result<(), RemoteError>,
    ) -> Option<SignupOutcome> {
        if !self.request.settle(id, outcome.is_ok()) {
            return None;
        }

        match outcome {
            Ok(()) => Some(SignupOutcome::Registered),
            Err(err) => {
                let message = err
                    .service_message()
                    .unwrap_or(SIGNUP_FAILED_MESSAGE)
                    .to_string();
                warn!(request_id = %id, error = %err, "signup failed");
                self.alert = Some(message.clone());
                Some(SignupOutcome::Failed(message))
            }
        }
    }
}
