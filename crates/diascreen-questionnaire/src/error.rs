use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("invalid answer '{0}': expected yes or no")]
    InvalidAnswer(String),
}
