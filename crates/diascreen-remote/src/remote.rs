use std::future::Future;
use std::pin::Pin;

use ureq::Agent;

use diascreen_core::models::credentials::Credentials;
use diascreen_core::models::profile::UserProfile;

use crate::client::build_agent;
use crate::endpoint::ApiEndpoint;
use crate::error::RemoteError;
use crate::flows;
use crate::wire::{LoginRequest, PredictRequest, SignupRequest};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The service operations the screens depend on.
///
/// Each call is a single request/response exchange with no retry or
/// backoff. Methods return boxed futures for dyn compatibility.
pub trait RemoteClient: Send + Sync {
    /// Authenticate and return the user record the service echoes back.
    fn login(&self, credentials: Credentials) -> BoxFuture<'_, Result<UserProfile, RemoteError>>;

    /// Register a new account. Does not authenticate.
    fn signup(&self, request: SignupRequest) -> BoxFuture<'_, Result<(), RemoteError>>;

    /// Submit a questionnaire and return the prediction text.
    fn predict(&self, request: PredictRequest) -> BoxFuture<'_, Result<String, RemoteError>>;

    /// Fetch the service banner.
    fn health(&self) -> BoxFuture<'_, Result<String, RemoteError>>;
}

/// [`RemoteClient`] over HTTP/JSON.
///
/// `ureq` is blocking, so each call runs on tokio's blocking pool and only
/// the awaiting task is suspended.
#[derive(Clone)]
pub struct HttpRemote {
    agent: Agent,
    endpoint: ApiEndpoint,
}

impl std::fmt::Debug for HttpRemote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRemote")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpRemote {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self {
            agent: build_agent(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }
}

async fn run_blocking<T, F>(call: F) -> Result<T, RemoteError>
where
    F: FnOnce() -> Result<T, RemoteError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| RemoteError::Transport(format!("request task failed: {e}")))?
}

impl RemoteClient for HttpRemote {
    fn login(&self, credentials: Credentials) -> BoxFuture<'_, Result<UserProfile, RemoteError>> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let request = LoginRequest::from(credentials);
        Box::pin(run_blocking(move || flows::login(&agent, &endpoint, &request)))
    }

    fn signup(&self, request: SignupRequest) -> BoxFuture<'_, Result<(), RemoteError>> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(run_blocking(move || flows::signup(&agent, &endpoint, &request)))
    }

    fn predict(&self, request: PredictRequest) -> BoxFuture<'_, Result<String, RemoteError>> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(run_blocking(move || flows::predict(&agent, &endpoint, &request)))
    }

    fn health(&self) -> BoxFuture<'_, Result<String, RemoteError>> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(run_blocking(move || flows::health(&agent, &endpoint)))
    }
}
