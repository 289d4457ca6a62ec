//! Request guards for authentication and authorization.

pub mod auth;
