//! Signing credentials: the access key identifier and its redacted secret.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
