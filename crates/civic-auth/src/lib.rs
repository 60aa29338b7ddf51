//! Civic Auth: session restore, stub login, remote registration,
//! and logout.

pub mod config;
pub mod error;
pub mod registration;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use registration::{HttpRegistrationApi, SimulatedRegistrationApi};
pub use service::{AuthService, LoginInput};
