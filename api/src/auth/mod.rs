//! Authentication middleware

pub mod jwt;

pub use jwt::require_admin;
