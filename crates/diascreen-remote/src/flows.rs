//! Blocking request/response exchanges. Each call issues exactly one
//! request; nothing is retried.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use ureq::Agent;

use diascreen_core::models::profile::UserProfile;

use crate::endpoint::ApiEndpoint;
use crate::error::RemoteError;
use crate::wire::{
    LoginRequest, LoginResponse, MessageResponse, PredictRequest, PredictResponse, SignupRequest,
};

/// Status and body text of a completed exchange.
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T, RemoteError> {
        serde_json::from_str(&self.body).map_err(|e| {
            RemoteError::Transport(format!("malformed response (status {}): {e}", self.status))
        })
    }

    /// A non-success status with a readable body is a rejection; an
    /// unreadable body is still a transport failure.
    fn rejection(&self) -> RemoteError {
        match self.json::<MessageResponse>() {
            Ok(body) => RemoteError::Rejected {
                status: self.status,
                message: body.message,
            },
            Err(e) => e,
        }
    }
}

fn post_json<B: Serialize>(
    agent: &Agent,
    endpoint: &ApiEndpoint,
    route: &str,
    body: &B,
) -> Result<RawResponse, RemoteError> {
    let url = endpoint.url(route)?;
    let payload = serde_json::to_vec(body)?;

    let mut response = agent
        .post(url.as_str())
        .header("Content-Type", "application/json")
        .send(&payload[..])
        .map_err(|e| RemoteError::Transport(format!("POST {url}: {e}")))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| RemoteError::Transport(format!("POST {url}: reading body: {e}")))?;

    Ok(RawResponse { status, body })
}

/// `POST /login`. A 2xx must carry the user record.
pub fn login(
    agent: &Agent,
    endpoint: &ApiEndpoint,
    request: &LoginRequest,
) -> Result<UserProfile, RemoteError> {
    info!(email = %request.email, "logging in");

    let raw = post_json(agent, endpoint, "login", request)?;
    if !raw.is_success() {
        let err = raw.rejection();
        warn!(status = raw.status, error = %err, "login rejected");
        return Err(err);
    }

    let body: LoginResponse = raw.json()?;
    body.user.ok_or_else(|| {
        RemoteError::Transport("login succeeded but response had no user".to_string())
    })
}

/// `POST /signup`. The body is `{message}` either way; the status decides.
pub fn signup(
    agent: &Agent,
    endpoint: &ApiEndpoint,
    request: &SignupRequest,
) -> Result<(), RemoteError> {
    info!(email = %request.email, "signing up");

    let raw = post_json(agent, endpoint, "signup", request)?;
    let body: MessageResponse = raw.json()?;
    if raw.is_success() {
        return Ok(());
    }

    warn!(status = raw.status, message = ?body.message, "signup rejected");
    Err(RemoteError::Rejected {
        status: raw.status,
        message: body.message,
    })
}

/// `POST /predict`. Returns the prediction text verbatim.
pub fn predict(
    agent: &Agent,
    endpoint: &ApiEndpoint,
    request: &PredictRequest,
) -> Result<String, RemoteError> {
    info!(age = %request.age, "requesting prediction");

    let raw = post_json(agent, endpoint, "predict", request)?;
    if !raw.is_success() {
        return Err(raw.rejection());
    }

    let body: PredictResponse = raw.json()?;
    Ok(body.prediction)
}

/// `GET /`. Returns the service banner.
pub fn health(agent: &Agent, endpoint: &ApiEndpoint) -> Result<String, RemoteError> {
    let url = endpoint.url("")?;
    let mut response = agent
        .get(url.as_str())
        .call()
        .map_err(|e| RemoteError::Transport(format!("GET {url}: {e}")))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| RemoteError::Transport(format!("GET {url}: reading body: {e}")))?;

    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(RemoteError::Rejected {
            status,
            message: Some(body),
        })
    }
}
