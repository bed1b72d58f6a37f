//! diascreen-questionnaire
//!
//! The diabetes symptom questionnaire. Pure data with no network dependency.
//! Defines the fixed, ordered set of yes/no questions, the per-session
//! answer state, and the 0/1 flags sent to the predictor.

pub mod answers;
pub mod error;
pub mod symptoms;

pub use answers::{Answer, SymptomAnswers, SymptomFlags};
pub use symptoms::{Question, Symptom};
