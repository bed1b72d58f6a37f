use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::QuestionnaireError;
use crate::symptoms::Symptom;

/// Presentation value of a single answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    #[default]
    No,
    Yes,
}

impl Answer {
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    /// Wire value: 1 for yes, 0 for no.
    pub fn flag(&self) -> u8 {
        u8::from(self.is_yes())
    }
}

impl From<bool> for Answer {
    fn from(yes: bool) -> Self {
        if yes { Answer::Yes } else { Answer::No }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Answer::No => "no",
            Answer::Yes => "yes",
        })
    }
}

impl FromStr for Answer {
    type Err = QuestionnaireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" => Ok(Answer::Yes),
            "no" | "n" | "0" => Ok(Answer::No),
            _ => Err(QuestionnaireError::InvalidAnswer(s.to_string())),
        }
    }
}

/// Answers for every symptom. All nine are always present and start at "no".
///
/// Each answer is independent; changing one never touches another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymptomAnswers([Answer; Symptom::COUNT]);

impl SymptomAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symptom: Symptom) -> Answer {
        self.0[symptom.index()]
    }

    pub fn set(&mut self, symptom: Symptom, answer: Answer) {
        self.0[symptom.index()] = answer;
    }

    pub fn toggle(&mut self, symptom: Symptom) {
        let flipped = Answer::from(!self.get(symptom).is_yes());
        self.set(symptom, flipped);
    }

    /// Set an answer by its wire key and presentation value, e.g.
    /// `("fatigue", "yes")`.
    pub fn set_by_key(&mut self, key: &str, answer: &str) -> Result<(), QuestionnaireError> {
        let symptom: Symptom = key.parse()?;
        self.set(symptom, answer.parse()?);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symptom, Answer)> + '_ {
        Symptom::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    pub fn flags(&self) -> SymptomFlags {
        SymptomFlags {
            frequent_urination: self.get(Symptom::FrequentUrination).flag(),
            excessive_thirst: self.get(Symptom::ExcessiveThirst).flag(),
            unexplained_weight_loss: self.get(Symptom::UnexplainedWeightLoss).flag(),
            increased_hunger: self.get(Symptom::IncreasedHunger).flag(),
            blurry_vision: self.get(Symptom::BlurryVision).flag(),
            fatigue: self.get(Symptom::Fatigue).flag(),
            diabetic_numbness: self.get(Symptom::DiabeticNumbness).flag(),
            slow_healing_sores: self.get(Symptom::SlowHealingSores).flag(),
            frequent_infections: self.get(Symptom::FrequentInfections).flag(),
        }
    }
}

/// The nine 0/1 values as the predictor expects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomFlags {
    pub frequent_urination: u8,
    pub excessive_thirst: u8,
    pub unexplained_weight_loss: u8,
    pub increased_hunger: u8,
    pub blurry_vision: u8,
    pub fatigue: u8,
    pub diabetic_numbness: u8,
    pub slow_healing_sores: u8,
    pub frequent_infections: u8,
}
