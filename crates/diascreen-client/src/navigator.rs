//! The screen state machine.
//!
//! [`Navigator`] owns exactly one [`Screen`] at a time plus the session.
//! Submissions are split into `begin_*` (validate, mark pending, hand out a
//! [`Ticket`]) and `complete_*` (apply the response). The network call runs
//! between the two without the navigator being borrowed, and a response
//! whose ticket no longer matches the current screen is dropped.

use std::fmt;

use tracing::{debug, info};

use diascreen_core::models::credentials::Credentials;
use diascreen_core::models::prediction::PredictionResult;
use diascreen_core::models::profile::UserProfile;
use diascreen_remote::RemoteError;
use diascreen_remote::wire::{PredictRequest, SignupRequest};

use crate::error::{NavigationError, SubmitError};
use crate::request::{RequestId, Ticket};
use crate::screens::signup::SIGNUP_SUCCEEDED_MESSAGE;
use crate::screens::{
    DashboardScreen, LoginOutcome, LoginScreen, QuestionnaireScreen, SignupOutcome, SignupScreen,
};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Login,
    Signup,
    Dashboard,
    Questionnaire,
}

impl ScreenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Login => "login",
            ScreenKind::Signup => "signup",
            ScreenKind::Dashboard => "dashboard",
            ScreenKind::Questionnaire => "questionnaire",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active screen and the state it owns.
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Signup(SignupScreen),
    Dashboard(DashboardScreen),
    Questionnaire(QuestionnaireScreen),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Login(_) => ScreenKind::Login,
            Screen::Signup(_) => ScreenKind::Signup,
            Screen::Dashboard(_) => ScreenKind::Dashboard,
            Screen::Questionnaire(_) => ScreenKind::Questionnaire,
        }
    }
}

#[derive(Debug)]
pub struct Navigator {
    screen: Screen,
    session: Session,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on a fresh login screen with nobody signed in.
    pub fn new() -> Self {
        Self {
            screen: Screen::Login(LoginScreen::new()),
            session: Session::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn login(&mut self) -> Option<&mut LoginScreen> {
        match &mut self.screen {
            Screen::Login(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn signup(&mut self) -> Option<&mut SignupScreen> {
        match &mut self.screen {
            Screen::Signup(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardScreen> {
        match &self.screen {
            Screen::Dashboard(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn questionnaire(&mut self) -> Option<&mut QuestionnaireScreen> {
        match &mut self.screen {
            Screen::Questionnaire(screen) => Some(screen),
            _ => None,
        }
    }

    // ── Transitions ────────────────────────────────────────────────

    pub fn open_signup(&mut self) -> Result<(), NavigationError> {
        self.require(ScreenKind::Login, "open signup")?;
        self.go(Screen::Signup(SignupScreen::new()));
        Ok(())
    }

    pub fn open_login(&mut self) -> Result<(), NavigationError> {
        self.require(ScreenKind::Signup, "open login")?;
        self.go(Screen::Login(LoginScreen::new()));
        Ok(())
    }

    pub fn open_questionnaire(&mut self) -> Result<(), NavigationError> {
        self.require(ScreenKind::Dashboard, "open questionnaire")?;
        if !self.session.is_signed_in() {
            return Err(NavigationError::NotSignedIn);
        }
        self.go(Screen::Questionnaire(QuestionnaireScreen::new()));
        Ok(())
    }

    /// Questionnaire returns to the dashboard, signup returns to login.
    pub fn back(&mut self) -> Result<(), NavigationError> {
        match self.kind() {
            ScreenKind::Questionnaire => {
                let user = self
                    .session
                    .user()
                    .cloned()
                    .ok_or(NavigationError::NotSignedIn)?;
                self.go(Screen::Dashboard(DashboardScreen::new(user)));
                Ok(())
            }
            ScreenKind::Signup => self.open_login(),
            from => Err(NavigationError::NotAvailable {
                action: "go back",
                from,
            }),
        }
    }

    pub fn log_out(&mut self) -> Result<(), NavigationError> {
        self.require(ScreenKind::Dashboard, "log out")?;
        self.session.sign_out();
        info!("signed out");
        self.go(Screen::Login(LoginScreen::new()));
        Ok(())
    }

    fn require(&self, expected: ScreenKind, action: &'static str) -> Result<(), NavigationError> {
        let from = self.kind();
        if from == expected {
            Ok(())
        } else {
            Err(NavigationError::NotAvailable { action, from })
        }
    }

    fn go(&mut self, next: Screen) {
        debug!(from = %self.kind(), to = %next.kind(), "navigating");
        self.screen = next;
    }

    fn wrong_screen(&self, expected: ScreenKind) -> SubmitError {
        SubmitError::WrongScreen {
            expected,
            actual: self.kind(),
        }
    }

    // ── Submissions ────────────────────────────────────────────────

    pub fn begin_login(&mut self) -> Result<Ticket<Credentials>, SubmitError> {
        let ticket = match &mut self.screen {
            Screen::Login(screen) => screen.begin_submit()?,
            _ => return Err(self.wrong_screen(ScreenKind::Login)),
        };
        info!(request_id = %ticket.id, email = %ticket.payload.email, "login submitted");
        Ok(ticket)
    }

    /// Apply a login response. Success signs the user in and opens the
    /// dashboard.
    pub fn complete_login(
        &mut self,
        id: RequestId,
        outcome: Result<UserProfile, RemoteError>,
    ) -> Option<LoginOutcome> {
        let Screen::Login(screen) = &mut self.screen else {
            return self.stale(ScreenKind::Login, id);
        };
        let Some(result) = screen.finish_submit(id, outcome) else {
            return self.stale(ScreenKind::Login, id);
        };

        if let LoginOutcome::Authenticated(user) = &result {
            info!(request_id = %id, email = %user.email, "signed in");
            self.session.sign_in(user.clone());
            self.go(Screen::Dashboard(DashboardScreen::new(user.clone())));
        }
        Some(result)
    }

    pub fn begin_signup(&mut self) -> Result<Ticket<SignupRequest>, SubmitError> {
        let ticket = match &mut self.screen {
            Screen::Signup(screen) => screen.begin_submit()?,
            _ => return Err(self.wrong_screen(ScreenKind::Signup)),
        };
        info!(request_id = %ticket.id, email = %ticket.payload.email, "signup submitted");
        Ok(ticket)
    }

    /// Apply a signup response. Success returns to a fresh login screen
    /// carrying only a notice; the entered profile is discarded.
    pub fn complete_signup(
        &mut self,
        id: RequestId,
        outcome: Result<(), RemoteError>,
    ) -> Option<SignupOutcome> {
        let Screen::Signup(screen) = &mut self.screen else {
            return self.stale(ScreenKind::Signup, id);
        };
        let Some(result) = screen.finish_submit(id, outcome) else {
            return self.stale(ScreenKind::Signup, id);
        };

        if result == SignupOutcome::Registered {
            info!(request_id = %id, "account registered");
            self.go(Screen::Login(LoginScreen::with_notice(
                SIGNUP_SUCCEEDED_MESSAGE,
            )));
        }
        Some(result)
    }

    pub fn begin_predict(&mut self) -> Result<Ticket<PredictRequest>, SubmitError> {
        let ticket = match &mut self.screen {
            Screen::Questionnaire(screen) => screen.begin_submit()?,
            _ => return Err(self.wrong_screen(ScreenKind::Questionnaire)),
        };
        info!(request_id = %ticket.id, "questionnaire submitted");
        Ok(ticket)
    }

    pub fn complete_predict(
        &mut self,
        id: RequestId,
        outcome: Result<String, RemoteError>,
    ) -> Option<PredictionResult> {
        let Screen::Questionnaire(screen) = &mut self.screen else {
            return self.stale(ScreenKind::Questionnaire, id);
        };
        let result = screen.finish_submit(id, outcome).cloned();
        if result.is_none() {
            return self.stale(ScreenKind::Questionnaire, id);
        }
        result
    }

    fn stale<T>(&self, issued_by: ScreenKind, id: RequestId) -> Option<T> {
        debug!(
            request_id = %id,
            issued_by = %issued_by,
            current = %self.kind(),
            "dropping stale response"
        );
        None
    }
}
