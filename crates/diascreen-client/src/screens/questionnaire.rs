use tracing::{info, warn};

use diascreen_core::models::patient::PatientForm;
use diascreen_core::models::prediction::PredictionResult;
use diascreen_core::validation::{ErrorMap, Field, validate_patient};
use diascreen_questionnaire::{Answer, Question, Symptom, SymptomAnswers};
use diascreen_remote::RemoteError;
use diascreen_remote::wire::PredictRequest;

use crate::error::SubmitError;
use crate::request::{RequestId, RequestState, Ticket};

/// Modal overlay showing the latest prediction or failure text.
#[derive(Debug, Clone, Default)]
pub struct ResultModal {
    result: Option<PredictionResult>,
}

impl ResultModal {
    pub fn is_visible(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct QuestionnaireScreen {
    patient: PatientForm,
    answers: SymptomAnswers,
    errors: ErrorMap,
    modal: ResultModal,
    request: RequestState,
}

impl QuestionnaireScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patient(&self) -> &PatientForm {
        &self.patient
    }

    pub fn answers(&self) -> &SymptomAnswers {
        &self.answers
    }

    /// Questions in display order, each with its current answer.
    pub fn question_list(&self) -> Vec<(&'static Question, Answer)> {
        diascreen_questionnaire::symptoms::questions()
            .iter()
            .map(|q| (q, self.answers.get(q.symptom)))
            .collect()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.patient.name = name.into();
        self.errors.clear(Field::Name);
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.patient.age = age.into();
        self.errors.clear(Field::Age);
    }

    pub fn set_answer(&mut self, symptom: Symptom, answer: Answer) {
        self.answers.set(symptom, answer);
    }

    pub fn toggle(&mut self, symptom: Symptom) {
        self.answers.toggle(symptom);
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn modal(&self) -> &ResultModal {
        &self.modal
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    /// Validate and build the prediction payload. Any result still on
    /// screen from an earlier attempt is discarded first.
    pub fn begin_submit(&mut self) -> Result<Ticket<PredictRequest>, SubmitError> {
        if self.request.is_pending() {
            return Err(SubmitError::InFlight);
        }

        self.modal.result = None;
        self.errors = validate_patient(&self.patient);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let identity = self.patient.identity()?;
        let payload = PredictRequest::new(identity, &self.answers);
        let id = self.request.begin()?;
        Ok(Ticket { id, payload })
    }

    /// Show the outcome in the modal. Failures of any kind render as the
    /// generic error text. `None` if `id` is not the outstanding request.
    pub fn finish_submit(
        &mut self,
        id: RequestId,
        outcome: Result<String, RemoteError>,
    ) -> Option<&PredictionResult> {
        if !self.request.settle(id, outcome.is_ok()) {
            return None;
        }

        let result = match outcome {
            Ok(text) => {
                info!(request_id = %id, "prediction received");
                PredictionResult::prediction(text)
            }
            Err(err) => {
                warn!(request_id = %id, error = %err, "prediction failed");
                PredictionResult::failure()
            }
        };
        self.modal.result = Some(result);
        self.modal.result.as_ref()
    }

    /// Close the modal. Name, age and answers stay as entered.
    pub fn dismiss_result(&mut self) {
        self.modal.result = None;
    }
}
