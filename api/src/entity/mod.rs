//! SeaORM entity models
//!
//! Table definitions for the PostgreSQL schema. Kept separate from the
//! domain entities so persistence details never leak into the domain layer.

pub mod admin_users;
pub mod articles;
pub mod certifications;
pub mod contact_messages;
pub mod posts;
pub mod showcase_projects;
