//! Line-oriented front-end.
//!
//! Reads one command per line from stdin and applies it to whichever screen
//! is active. Submissions run on their own task so the prompt stays live
//! while a request is in flight.

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use diascreen_client::commands;
use diascreen_client::error::SubmitError;
use diascreen_client::navigator::{Navigator, Screen, ScreenKind};
use diascreen_client::screens::{
    LoginOutcome, LoginScreen, QuestionnaireScreen, SignupOutcome, SignupScreen,
};
use diascreen_client::state::AppState;
use diascreen_core::models::profile::Gender;
use diascreen_core::validation::ErrorMap;
use diascreen_questionnaire::{Answer, Symptom};

const HELP: &str = "\
global:        help | show | quit
login:         email <v> | password <v> | submit | signup
signup:        email|password|first_name|last_name|gender|age|nationality <v> | submit | back
dashboard:     check | logout
questionnaire: name <v> | age <v> | answer <n|key> <yes|no> | toggle <n|key> | submit | dismiss | back";

pub async fn run(state: AppState) -> Result<()> {
    println!("{HELP}\n");
    render(&*state.navigator.lock().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "show" => render(&*state.navigator.lock().await),
            "submit" => spawn_submit(&state).await,
            _ => {
                let mut nav = state.navigator.lock().await;
                match apply(&mut nav, command, arg) {
                    Ok(true) => render(&nav),
                    Ok(false) => {}
                    Err(message) => println!("! {message}"),
                }
            }
        }
    }

    Ok(())
}

/// Apply a non-submit command. Returns whether the screen should be
/// re-rendered.
fn apply(nav: &mut Navigator, command: &str, arg: &str) -> Result<bool, String> {
    let kind = nav.kind();
    let unavailable = || format!("'{command}' is not available on the {kind} screen");

    match (kind, command) {
        (ScreenKind::Login, "signup") => nav.open_signup().map_err(|e| e.to_string())?,
        (ScreenKind::Signup | ScreenKind::Questionnaire, "back") => {
            nav.back().map_err(|e| e.to_string())?
        }
        (ScreenKind::Dashboard, "check") => nav.open_questionnaire().map_err(|e| e.to_string())?,
        (ScreenKind::Dashboard, "logout") => nav.log_out().map_err(|e| e.to_string())?,
        _ => {
            return match nav.screen_mut() {
                Screen::Login(screen) => edit_login(screen, command, arg).ok_or_else(unavailable),
                Screen::Signup(screen) => edit_signup(screen, command, arg)?.ok_or_else(unavailable),
                Screen::Questionnaire(screen) => {
                    edit_questionnaire(screen, command, arg)?.ok_or_else(unavailable)
                }
                Screen::Dashboard(_) => Err(unavailable()),
            };
        }
    }
    Ok(true)
}

fn edit_login(screen: &mut LoginScreen, field: &str, value: &str) -> Option<bool> {
    match field {
        "email" => screen.set_email(value),
        "password" => screen.set_password(value),
        _ => return None,
    }
    Some(false)
}

fn edit_signup(screen: &mut SignupScreen, field: &str, value: &str) -> Result<Option<bool>, String> {
    match field {
        "email" => screen.set_email(value),
        "password" => screen.set_password(value),
        "first_name" => screen.set_first_name(value),
        "last_name" => screen.set_last_name(value),
        "gender" if value.is_empty() => screen.set_gender(None),
        "gender" => screen.set_gender(Some(value.parse::<Gender>().map_err(|e| e.to_string())?)),
        "age" => screen.set_age(value),
        "nationality" => screen.set_nationality(value),
        _ => return Ok(None),
    }
    Ok(Some(false))
}

fn edit_questionnaire(
    screen: &mut QuestionnaireScreen,
    command: &str,
    arg: &str,
) -> Result<Option<bool>, String> {
    match command {
        "name" => screen.set_name(arg),
        "age" => screen.set_age(arg),
        "answer" => {
            let (which, value) = arg
                .split_once(char::is_whitespace)
                .ok_or("usage: answer <n|key> <yes|no>")?;
            let symptom = which.parse::<Symptom>().map_err(|e| e.to_string())?;
            let answer = value.trim().parse::<Answer>().map_err(|e| e.to_string())?;
            screen.set_answer(symptom, answer);
            return Ok(Some(true));
        }
        "toggle" => {
            screen.toggle(arg.parse::<Symptom>().map_err(|e| e.to_string())?);
            return Ok(Some(true));
        }
        "dismiss" => {
            screen.dismiss_result();
            return Ok(Some(true));
        }
        _ => return Ok(None),
    }
    Ok(Some(false))
}

async fn spawn_submit(state: &AppState) {
    let kind = state.navigator.lock().await.kind();
    let state = state.clone();
    tokio::spawn(async move {
        let report = match kind {
            ScreenKind::Login => {
                commands::submit_login(&state).await.map(|o| o.map(describe_login))
            }
            ScreenKind::Signup => {
                commands::submit_signup(&state).await.map(|o| o.map(describe_signup))
            }
            ScreenKind::Questionnaire => commands::submit_questionnaire(&state)
                .await
                .map(|o| o.map(|result| format!("== result ==\n{}", result.text))),
            ScreenKind::Dashboard => {
                println!("! nothing to submit on the dashboard");
                return;
            }
        };

        match report {
            Ok(Some(message)) => {
                println!("{message}");
                render(&*state.navigator.lock().await);
            }
            // Response belonged to a screen that is no longer shown.
            Ok(None) => {}
            Err(SubmitError::Invalid(errors)) => print_errors(&errors),
            Err(err) => println!("! {err}"),
        }
    });
}

fn describe_login(outcome: LoginOutcome) -> String {
    match outcome {
        LoginOutcome::Authenticated(user) => format!("Signed in as {}", user.email),
        LoginOutcome::Failed(message) => format!("! {message}"),
    }
}

fn describe_signup(outcome: SignupOutcome) -> String {
    match outcome {
        SignupOutcome::Registered => "Account created.".to_string(),
        SignupOutcome::Failed(message) => format!("! {message}"),
    }
}

fn print_errors(errors: &ErrorMap) {
    for (field, message) in errors.iter() {
        println!("  {:<12} {message}", field.key());
    }
}

fn render(nav: &Navigator) {
    println!("── {} ──", nav.kind());
    match nav.screen() {
        Screen::Login(s) => {
            if let Some(notice) = s.notice() {
                println!("{notice}");
            }
            println!("email:    {}", s.credentials().email);
            println!("password: {}", "*".repeat(s.credentials().password.chars().count()));
            if let Some(err) = s.server_error() {
                println!("! {err}");
            }
        }
        Screen::Signup(s) => {
            let form = s.form();
            println!("email:       {}", form.email);
            println!("first_name:  {}", form.first_name);
            println!("last_name:   {}", form.last_name);
            println!("gender:      {}", form.gender.map(|g| g.label()).unwrap_or("-"));
            println!("age:         {}", form.age);
            println!("nationality: {}", form.nationality);
            if let Some(alert) = s.alert() {
                println!("! {alert}");
            }
        }
        Screen::Dashboard(s) => {
            println!("{}", s.greeting());
            for (label, value) in s.summary() {
                println!("{label:<12} {value}");
            }
        }
        Screen::Questionnaire(s) => {
            println!("name: {}", s.patient().name);
            println!("age:  {}", s.patient().age);
            for (question, answer) in s.question_list() {
                println!("[{:>3}] {}", answer.to_string(), question.text);
            }
            if let Some(result) = s.modal().result() {
                println!("== result ==\n{}", result.text);
            }
        }
    }
}
