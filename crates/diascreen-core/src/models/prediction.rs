use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Text shown in the result modal when a prediction could not be obtained.
pub const PREDICTION_FAILED_MESSAGE: &str = "Error: Something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PredictionKind {
    /// Text returned by the remote predictor.
    Prediction,
    /// Locally synthesized failure text.
    Error,
}

/// What the result modal displays. Success and failure share this shape so
/// both render through the same surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub kind: PredictionKind,
    pub text: String,
    pub produced_at: jiff::Timestamp,
}

impl PredictionResult {
    pub fn prediction(text: impl Into<String>) -> Self {
        Self {
            kind: PredictionKind::Prediction,
            text: text.into(),
            produced_at: jiff::Timestamp::now(),
        }
    }

    pub fn failure() -> Self {
        Self {
            kind: PredictionKind::Error,
            text: PREDICTION_FAILED_MESSAGE.to_string(),
            produced_at: jiff::Timestamp::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == PredictionKind::Error
    }
}
