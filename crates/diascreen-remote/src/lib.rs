//! diascreen-remote
//!
//! The three calls the client makes to the prediction/auth service
//! (login, signup, predict), plus a health probe.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod flows;
pub mod remote;
pub mod wire;

pub use endpoint::ApiEndpoint;
pub use error::RemoteError;
pub use remote::{BoxFuture, HttpRemote, RemoteClient};
