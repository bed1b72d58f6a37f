use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::credentials::Credentials;
use crate::models::profile::{Gender, UserProfile};
use crate::validation::signup_age;

/// Raw signup input, as typed. `gender` is `None` until a picker value is chosen.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub age: String,
    pub nationality: String,
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("gender", &self.gender)
            .field("age", &self.age)
            .field("nationality", &self.nationality)
            .finish_non_exhaustive()
    }
}

impl SignupForm {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// Split a validated form into the password and the profile it registers.
    ///
    /// The age keeps only its integer part, as [`signup_age`] judges it.
    pub fn to_profile(&self) -> Result<(String, UserProfile), CoreError> {
        let gender = self
            .gender
            .ok_or_else(|| CoreError::MissingField("gender".to_string()))?;

        let age = signup_age(&self.age).ok_or_else(|| CoreError::InvalidAge(self.age.clone()))?;

        let profile = UserProfile {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender,
            age,
            nationality: self.nationality.clone(),
        };

        Ok((self.password.clone(), profile))
    }
}
