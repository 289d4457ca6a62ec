//! Event participation backend with live notification delivery.
//!
//! The crate is organized into two top-level modules:
//!
//! - [`model`] - DTOs crossing the HTTP and WebSocket boundary
//! - [`server`] - the layered backend: controllers, services, repositories,
//!   the WebSocket gateway, and the reminder scheduler

pub mod model;
pub mod server;
