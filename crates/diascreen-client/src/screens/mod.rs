//! One controller per screen. Each owns its field state, its validation
//! errors, and its request state; nothing is shared between screens except
//! what the navigator hands over on a transition.

pub mod dashboard;
pub mod login;
pub mod questionnaire;
pub mod signup;

pub use dashboard::DashboardScreen;
pub use login::{LoginOutcome, LoginScreen};
pub use questionnaire::{QuestionnaireScreen, ResultModal};
pub use signup::{SignupOutcome, SignupScreen};
