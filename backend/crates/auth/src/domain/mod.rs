//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{NewUser, Session, User};
pub use repository::{SessionStore, UserDirectory};
