use thiserror::Error;

use diascreen_core::error::CoreError;
use diascreen_core::validation::ErrorMap;

use crate::navigator::ScreenKind;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Validation failed; nothing was sent.
    #[error("form has {} invalid field(s)", .0.iter().count())]
    Invalid(ErrorMap),

    #[error("a submission is already in progress")]
    InFlight,

    #[error("cannot submit {expected} form while on the {actual} screen")]
    WrongScreen {
        expected: ScreenKind,
        actual: ScreenKind,
    },

    #[error("form error: {0}")]
    Form(#[from] CoreError),
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("cannot {action} from the {from} screen")]
    NotAvailable {
        action: &'static str,
        from: ScreenKind,
    },

    #[error("no signed-in user")]
    NotSignedIn,
}
