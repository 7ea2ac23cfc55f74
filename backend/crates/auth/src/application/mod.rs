//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod outcome;
pub mod register;
pub mod session;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use outcome::{CredentialOutcome, FieldError};
pub use register::{RegisterInput, RegisterUseCase};
pub use session::{RequestSession, SessionManager};
