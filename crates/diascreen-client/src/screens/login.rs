use tracing::warn;

use diascreen_core::models::credentials::Credentials;
use diascreen_core::models::profile::UserProfile;
use diascreen_core::validation::{ErrorMap, Field, validate_login};
use diascreen_remote::RemoteError;

use crate::error::SubmitError;
use crate::request::{RequestId, RequestState, Ticket};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";
pub const LOGIN_FAILED_MESSAGE: &str = "Error logging in.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(UserProfile),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct LoginScreen {
    credentials: Credentials,
    errors: ErrorMap,
    server_error: Option<String>,
    notice: Option<String>,
    request: RequestState,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh screen showing a one-line notice, e.g. after signing up.
    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::default()
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
        self.errors.clear(Field::Email);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
        self.errors.clear(Field::Password);
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    /// Validate and, if clean, mark the screen pending. On validation
    /// failure the typed credentials stay in place for correction.
    pub fn begin_submit(&mut self) -> Result<Ticket<Credentials>, SubmitError> {
        if self.request.is_pending() {
            return Err(SubmitError::InFlight);
        }

        self.server_error = None;
        self.notice = None;
        self.errors = validate_login(&self.credentials);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let id = self.request.begin()?;
        Ok(Ticket {
            id,
            payload: self.credentials.clone(),
        })
    }

    /// Apply the service's answer. `None` if `id` is not the outstanding
    /// request.
    pub fn finish_submit(
        &mut self,
        id: RequestId,
        outcome: Result<UserProfile, RemoteError>,
    ) -> Option<LoginOutcome> {
        if !self.request.settle(id, outcome.is_ok()) {
            return None;
        }

        match outcome {
            Ok(user) => Some(LoginOutcome::Authenticated(user)),
            Err(err) => {
                let message = login_failure_message(&err);
                warn!(request_id = %id, error = %err, "login failed");
                self.server_error = Some(message.clone());
                Some(LoginOutcome::Failed(message))
            }
        }
    }
}

fn login_failure_message(err: &RemoteError) -> String {
    if err.is_rejection() {
        err.service_message()
            .unwrap_or(INVALID_CREDENTIALS_MESSAGE)
            .to_string()
    } else {
        LOGIN_FAILED_MESSAGE.to_string()
    }
}
