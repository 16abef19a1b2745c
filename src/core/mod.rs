//! Business logic layer

pub mod auth;
