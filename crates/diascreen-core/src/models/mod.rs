pub mod credentials;
pub mod patient;
pub mod prediction;
pub mod profile;
pub mod signup;
