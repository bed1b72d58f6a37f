//! JSON bodies exchanged with the service.

use std::fmt;

use serde::{Deserialize, Serialize};

use diascreen_core::error::CoreError;
use diascreen_core::models::credentials::Credentials;
use diascreen_core::models::patient::PatientIdentity;
use diascreen_core::models::profile::{Gender, UserProfile};
use diascreen_core::models::signup::SignupForm;
use diascreen_questionnaire::{SymptomAnswers, SymptomFlags};

/// `POST /login` body.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<Credentials> for LoginRequest {
    fn from(credentials: Credentials) -> Self {
        Self {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

/// `POST /signup` body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub age: u32,
    pub nationality: String,
}

impl SignupRequest {
    pub fn from_form(form: &SignupForm) -> Result<Self, CoreError> {
        let (password, profile) = form.to_profile()?;
        Ok(Self {
            email: profile.email,
            password,
            first_name: profile.first_name,
            last_name: profile.last_name,
            gender: profile.gender,
            age: profile.age,
            nationality: profile.nationality,
        })
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("gender", &self.gender)
            .field("age", &self.age)
            .field("nationality", &self.nationality)
            .finish_non_exhaustive()
    }
}

/// `POST /predict` body: name, numeric age, and nine 0/1 symptom flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub name: String,
    pub age: serde_json::Number,
    #[serde(flatten)]
    pub symptoms: SymptomFlags,
}

impl PredictRequest {
    pub fn new(identity: PatientIdentity, answers: &SymptomAnswers) -> Self {
        Self {
            name: identity.name,
            age: identity.age,
            symptoms: answers.flags(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// `{message}` body returned by signup and by every error status. The
/// predictor reports its errors under `error`.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
}
