//! In-memory `RemoteClient` that replays queued responses.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::Semaphore;

use diascreen_client::navigator::Navigator;
use diascreen_client::state::AppState;
use diascreen_core::models::credentials::Credentials;
use diascreen_core::models::profile::{Gender, UserProfile};
use diascreen_remote::wire::{PredictRequest, SignupRequest};
use diascreen_remote::{BoxFuture, RemoteClient, RemoteError};

#[derive(Default)]
pub struct ScriptedRemote {
    logins: Mutex<VecDeque<Result<UserProfile, RemoteError>>>,
    signups: Mutex<VecDeque<Result<(), RemoteError>>>,
    predictions: Mutex<VecDeque<Result<String, RemoteError>>>,
    pub login_calls: AtomicUsize,
    pub signup_calls: AtomicUsize,
    pub predict_calls: AtomicUsize,
    pub last_signup: Mutex<Option<SignupRequest>>,
    pub last_predict: Mutex<Option<PredictRequest>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call waits for a permit on the returned semaphore before
    /// answering.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let remote = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (remote, gate)
    }

    pub fn push_login(&self, outcome: Result<UserProfile, RemoteError>) {
        self.logins.lock().unwrap().push_back(outcome);
    }

    pub fn push_signup(&self, outcome: Result<(), RemoteError>) {
        self.signups.lock().unwrap().push_back(outcome);
    }

    pub fn push_predict(&self, outcome: Result<String, RemoteError>) {
        self.predictions.lock().unwrap().push_back(outcome);
    }

    pub fn calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
            + self.signup_calls.load(Ordering::SeqCst)
            + self.predict_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}

fn unscripted() -> RemoteError {
    RemoteError::Transport("no scripted response".to_string())
}

impl RemoteClient for ScriptedRemote {
    fn login(&self, _credentials: Credentials) -> BoxFuture<'_, Result<UserProfile, RemoteError>> {
        Box::pin(async move {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            self.wait().await;
            self.logins.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
        })
    }

    fn signup(&self, request: SignupRequest) -> BoxFuture<'_, Result<(), RemoteError>> {
        Box::pin(async move {
            self.signup_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_signup.lock().unwrap() = Some(request);
            self.wait().await;
            self.signups.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
        })
    }

    fn predict(&self, request: PredictRequest) -> BoxFuture<'_, Result<String, RemoteError>> {
        Box::pin(async move {
            self.predict_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_predict.lock().unwrap() = Some(request);
            self.wait().await;
            self.predictions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(unscripted()))
        })
    }

    fn health(&self) -> BoxFuture<'_, Result<String, RemoteError>> {
        Box::pin(async { Ok("Diabetes prediction API".to_string()) })
    }
}

pub fn app(remote: Arc<ScriptedRemote>) -> AppState {
    AppState::new(remote)
}

pub fn ada() -> UserProfile {
    UserProfile {
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        gender: Gender::Female,
        age: 36,
        nationality: "British".to_string(),
    }
}

pub fn rejected(status: u16, message: &str) -> RemoteError {
    RemoteError::Rejected {
        status,
        message: Some(message.to_string()),
    }
}

pub fn fill_login(nav: &mut Navigator) {
    let screen = nav.login().unwrap();
    screen.set_email("ada@example.com");
    screen.set_password("correct-horse");
}

pub fn fill_signup(nav: &mut Navigator) {
    let screen = nav.signup().unwrap();
    screen.set_email("ada@example.com");
    screen.set_password("correct-horse");
    screen.set_first_name("Ada");
    screen.set_last_name("Lovelace");
    screen.set_gender(Some(Gender::Female));
    screen.set_age("36");
    screen.set_nationality("British");
}

/// Sign in as [`ada`] and open the questionnaire.
pub fn signed_in_questionnaire() -> Navigator {
    let mut nav = Navigator::new();
    fill_login(&mut nav);
    let ticket = nav.begin_login().unwrap();
    nav.complete_login(ticket.id, Ok(ada())).unwrap();
    nav.open_questionnaire().unwrap();
    nav
}

/// Poll until `done` holds. Panics after a couple of seconds.
pub async fn wait_until(mut done: impl FnMut() -> bool) {
    for _ in 0..200 {
        if done() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached");
}
