use std::fmt;

use uuid::Uuid;

use crate::error::SubmitError;

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-screen submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending(RequestId),
    Succeeded,
    Failed,
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending(_))
    }

    /// Move to `Pending` under a fresh id. Refused while another request
    /// is outstanding.
    pub fn begin(&mut self) -> Result<RequestId, SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::InFlight);
        }
        let id = RequestId::new();
        *self = RequestState::Pending(id);
        Ok(id)
    }

    /// Record the outcome of `id`. Returns false, leaving the state alone,
    /// when `id` is not the outstanding request.
    pub fn settle(&mut self, id: RequestId, succeeded: bool) -> bool {
        if *self != RequestState::Pending(id) {
            return false;
        }
        *self = if succeeded {
            RequestState::Succeeded
        } else {
            RequestState::Failed
        };
        true
    }
}

/// Receipt for an in-flight submission: the id to complete it with and the
/// payload to send.
#[derive(Debug, Clone)]
pub struct Ticket<P> {
    pub id: RequestId,
    pub payload: P,
}
