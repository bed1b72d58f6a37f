//! diascreen-core
//!
//! Pure domain types and form validation rules, shared by every other
//! diascreen crate. No network dependency.

pub mod error;
pub mod models;
pub mod validation;
