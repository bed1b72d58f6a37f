use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::validation::parse_number;

/// Raw name/age input on the questionnaire screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
}

/// Who the questionnaire is about, as sent to the predictor.
///
/// `age` is a JSON number: an integer when the input was integral, a float
/// otherwise. It is not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIdentity {
    pub name: String,
    #[ts(type = "number")]
    pub age: serde_json::Number,
}

impl PatientForm {
    pub fn identity(&self) -> Result<PatientIdentity, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }

        let value =
            parse_number(&self.age).ok_or_else(|| CoreError::InvalidAge(self.age.clone()))?;

        Ok(PatientIdentity {
            name: name.to_string(),
            age: to_json_number(value)
                .ok_or_else(|| CoreError::InvalidAge(self.age.clone()))?,
        })
    }
}

fn to_json_number(value: f64) -> Option<serde_json::Number> {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(serde_json::Number::from(value as i64))
    } else {
        serde_json::Number::from_f64(value)
    }
}
