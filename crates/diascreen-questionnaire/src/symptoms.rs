use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::QuestionnaireError;

/// One of the nine screened symptoms, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    FrequentUrination,
    ExcessiveThirst,
    UnexplainedWeightLoss,
    IncreasedHunger,
    BlurryVision,
    Fatigue,
    DiabeticNumbness,
    SlowHealingSores,
    FrequentInfections,
}

impl Symptom {
    pub const COUNT: usize = 9;

    pub const ALL: [Symptom; Symptom::COUNT] = [
        Symptom::FrequentUrination,
        Symptom::ExcessiveThirst,
        Symptom::UnexplainedWeightLoss,
        Symptom::IncreasedHunger,
        Symptom::BlurryVision,
        Symptom::Fatigue,
        Symptom::DiabeticNumbness,
        Symptom::SlowHealingSores,
        Symptom::FrequentInfections,
    ];

    /// Wire key, e.g. `frequent_urination`.
    pub fn key(&self) -> &'static str {
        match self {
            Symptom::FrequentUrination => "frequent_urination",
            Symptom::ExcessiveThirst => "excessive_thirst",
            Symptom::UnexplainedWeightLoss => "unexplained_weight_loss",
            Symptom::IncreasedHunger => "increased_hunger",
            Symptom::BlurryVision => "blurry_vision",
            Symptom::Fatigue => "fatigue",
            Symptom::DiabeticNumbness => "diabetic_numbness",
            Symptom::SlowHealingSores => "slow_healing_sores",
            Symptom::FrequentInfections => "frequent_infections",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Symptom::FrequentUrination => {
                "Are you experiencing any changes or increase in your frequency of urination?"
            }
            Symptom::ExcessiveThirst => "Are you feeling excessive thirst?",
            Symptom::UnexplainedWeightLoss => "Are you losing weight gradually?",
            Symptom::IncreasedHunger => "Is your appetite significantly increased?",
            Symptom::BlurryVision => "Is your vision varying or decreasing?",
            Symptom::Fatigue => "Are you feeling fatigue?",
            Symptom::DiabeticNumbness => "Are you feeling numbness?",
            Symptom::SlowHealingSores => "Do your wounds take a long time to heal?",
            Symptom::FrequentInfections => {
                "Are you experiencing any infections (skin, chest, or urinary tract infections)?"
            }
        }
    }

    /// Position in the questionnaire, starting at 1.
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Symptom {
    type Err = QuestionnaireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Symptom::ALL
            .into_iter()
            .find(|sym| sym.key() == needle || sym.number().to_string() == needle)
            .ok_or_else(|| QuestionnaireError::UnknownSymptom(s.to_string()))
    }
}

/// A rendered question, e.g. `"2. Are you feeling excessive thirst?"`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub symptom: Symptom,
    pub key: String,
    pub text: String,
}

/// All questions in display order.
pub fn questions() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        Symptom::ALL
            .iter()
            .map(|symptom| Question {
                symptom: *symptom,
                key: symptom.key().to_string(),
                text: format!("{}. {}", symptom.number(), symptom.prompt()),
            })
            .collect()
    });
    &QUESTIONS
}
