//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Cookie management
//!
//! Nothing in here knows about users, sessions, or posts; the feature
//! crates compose these pieces.

pub mod cookie;
pub mod password;
