//! Domain Layer - Post entity and store trait

pub mod entities;
pub mod repository;
