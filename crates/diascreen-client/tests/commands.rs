mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use diascreen_client::commands;
use diascreen_client::error::SubmitError;
use diascreen_client::navigator::ScreenKind;
use diascreen_client::screens::{LoginOutcome, SignupOutcome};
use diascreen_core::models::prediction::PREDICTION_FAILED_MESSAGE;
use diascreen_core::models::profile::Gender;

use common::{ScriptedRemote, ada, app, fill_login, fill_signup, rejected, wait_until};

#[tokio::test]
async fn invalid_login_makes_no_call() {
    let remote = Arc::new(ScriptedRemote::new());
    let state = app(remote.clone());

    let err = commands::submit_login(&state).await.unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(remote.calls(), 0);
}

#[tokio::test]
async fn login_makes_exactly_one_call() {
    let remote = Arc::new(ScriptedRemote::new());
    remote.push_login(Err(rejected(401, "Invalid credentials")));
    let state = app(remote.clone());
    fill_login(&mut *state.navigator.lock().await);

    let outcome = commands::submit_login(&state).await.unwrap();
    assert_eq!(
        outcome,
        Some(LoginOutcome::Failed("Invalid credentials".to_string()))
    );
    assert_eq!(remote.login_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.navigator.lock().await.kind(), ScreenKind::Login);
}

#[tokio::test]
async fn login_then_questionnaire_round_trip() {
    let remote = Arc::new(ScriptedRemote::new());
    remote.push_login(Ok(ada()));
    remote.push_predict(Ok("High risk of diabetes".to_string()));
    let state = app(remote.clone());
    fill_login(&mut *state.navigator.lock().await);

    commands::submit_login(&state).await.unwrap();
    {
        let mut nav = state.navigator.lock().await;
        nav.open_questionnaire().unwrap();
        let screen = nav.questionnaire().unwrap();
        screen.set_name("Ada");
        screen.set_age("36");
    }

    let result = commands::submit_questionnaire(&state).await.unwrap().unwrap();
    assert_eq!(result.text, "High risk of diabetes");

    let sent = remote.last_predict.lock().unwrap().clone().unwrap();
    assert_eq!(sent.name, "Ada");
    assert_eq!(sent.age.as_u64(), Some(36));
}

#[tokio::test]
async fn predict_rejection_collapses_to_generic_error() {
    let remote = Arc::new(ScriptedRemote::new());
    remote.push_login(Ok(ada()));
    remote.push_predict(Err(rejected(500, "model not loaded")));
    let state = app(remote.clone());
    fill_login(&mut *state.navigator.lock().await);
    commands::submit_login(&state).await.unwrap();
    {
        let mut nav = state.navigator.lock().await;
        nav.open_questionnaire().unwrap();
        let screen = nav.questionnaire().unwrap();
        screen.set_name("Ada");
        screen.set_age("36");
    }

    let result = commands::submit_questionnaire(&state).await.unwrap().unwrap();
    assert!(result.is_error());
    assert_eq!(result.text, PREDICTION_FAILED_MESSAGE);
}

#[tokio::test]
async fn signup_sends_typed_payload_and_returns_to_login() {
    let remote = Arc::new(ScriptedRemote::new());
    remote.push_signup(Ok(()));
    let state = app(remote.clone());
    {
        let mut nav = state.navigator.lock().await;
        nav.open_signup().unwrap();
        fill_signup(&mut nav);
    }

    let outcome = commands::submit_signup(&state).await.unwrap();
    assert_eq!(outcome, Some(SignupOutcome::Registered));

    let sent = remote.last_signup.lock().unwrap().clone().unwrap();
    assert_eq!(sent.gender, Gender::Female);
    assert_eq!(sent.age, 36);
    assert_eq!(remote.login_calls.load(Ordering::SeqCst), 0);

    let mut nav = state.navigator.lock().await;
    assert_eq!(nav.login().unwrap().notice(), Some("Signup successful!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn double_submit_is_refused_while_pending() {
    let (remote, gate) = ScriptedRemote::gated();
    let remote = Arc::new(remote);
    remote.push_login(Ok(ada()));
    let state = app(remote.clone());
    fill_login(&mut *state.navigator.lock().await);

    let first = tokio::spawn({
        let state = state.clone();
        async move { commands::submit_login(&state).await }
    });
    wait_until(|| remote.login_calls.load(Ordering::SeqCst) == 1).await;

    let second = commands::submit_login(&state).await;
    assert!(matches!(second, Err(SubmitError::InFlight)));
    assert_eq!(remote.login_calls.load(Ordering::SeqCst), 1);

    gate.add_permits(1);
    let outcome = first.await.unwrap().unwrap();
    assert_eq!(outcome, Some(LoginOutcome::Authenticated(ada())));
    assert_eq!(state.navigator.lock().await.kind(), ScreenKind::Dashboard);
}

#[tokio::test(flavor = "multi_thread")]
async fn navigating_away_drops_the_late_response() {
    let (remote, gate) = ScriptedRemote::gated();
    let remote = Arc::new(remote);
    remote.push_login(Ok(ada()));
    remote.push_predict(Ok("Low risk".to_string()));
    let state = app(remote.clone());
    fill_login(&mut *state.navigator.lock().await);

    gate.add_permits(1);
    commands::submit_login(&state).await.unwrap();
    {
        let mut nav = state.navigator.lock().await;
        nav.open_questionnaire().unwrap();
        let screen = nav.questionnaire().unwrap();
        screen.set_name("Ada");
        screen.set_age("36");
    }

    let pending = tokio::spawn({
        let state = state.clone();
        async move { commands::submit_questionnaire(&state).await }
    });
    wait_until(|| remote.predict_calls.load(Ordering::SeqCst) == 1).await;

    state.navigator.lock().await.back().unwrap();
    gate.add_permits(1);

    assert_eq!(pending.await.unwrap().unwrap(), None);
    assert_eq!(state.navigator.lock().await.kind(), ScreenKind::Dashboard);
}

#[tokio::test]
async fn check_service_returns_banner() {
    let state = app(Arc::new(ScriptedRemote::new()));
    let banner = commands::check_service(&state).await.unwrap();
    assert_eq!(banner, "Diabetes prediction API");
}

#[tokio::test]
async fn unscripted_call_is_a_transport_failure() {
    let remote = Arc::new(ScriptedRemote::new());
    let state = app(remote.clone());
    fill_login(&mut *state.navigator.lock().await);

    let outcome = commands::submit_login(&state).await.unwrap();
    assert_eq!(
        outcome,
        Some(LoginOutcome::Failed("Error logging in.".to_string()))
    );
}
