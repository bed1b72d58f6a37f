//! Async entry points the front-end calls.
//!
//! Each submit takes the navigator lock twice: once to begin (validate and
//! mark pending) and once to complete. The remote call in between runs with
//! the lock released, so the user can keep navigating while it is in
//! flight. `Ok(None)` means the response arrived after its screen was gone
//! and was dropped.

use tracing::{info, warn};

use diascreen_core::models::prediction::PredictionResult;
use diascreen_remote::RemoteError;

use crate::error::SubmitError;
use crate::screens::{LoginOutcome, SignupOutcome};
use crate::state::AppState;

pub async fn submit_login(state: &AppState) -> Result<Option<LoginOutcome>, SubmitError> {
    let ticket = state.navigator.lock().await.begin_login()?;
    let outcome = state.remote.login(ticket.payload).await;
    Ok(state.navigator.lock().await.complete_login(ticket.id, outcome))
}

pub async fn submit_signup(state: &AppState) -> Result<Option<SignupOutcome>, SubmitError> {
    let ticket = state.navigator.lock().await.begin_signup()?;
    let outcome = state.remote.signup(ticket.payload).await;
    Ok(state.navigator.lock().await.complete_signup(ticket.id, outcome))
}

pub async fn submit_questionnaire(
    state: &AppState,
) -> Result<Option<PredictionResult>, SubmitError> {
    let ticket = state.navigator.lock().await.begin_predict()?;
    let outcome = state.remote.predict(ticket.payload).await;
    Ok(state.navigator.lock().await.complete_predict(ticket.id, outcome))
}

/// Probe the service root and return its banner.
pub async fn check_service(state: &AppState) -> Result<String, RemoteError> {
    match state.remote.health().await {
        Ok(banner) => {
            info!(banner = %banner, "service reachable");
            Ok(banner)
        }
        Err(err) => {
            warn!(error = %err, "service check failed");
            Err(err)
        }
    }
}
