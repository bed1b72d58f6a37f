//! diascreen-client library root.
//!
//! Screen controllers, navigation, and the async command layer. The
//! terminal front-end in `main.rs` and the integration tests both drive
//! the client through these modules.

pub mod commands;
pub mod config;
pub mod error;
pub mod navigator;
pub mod request;
pub mod screens;
pub mod session;
pub mod state;
