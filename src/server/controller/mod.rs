//! HTTP request handlers.
//!
//! Controllers stay thin: they resolve the caller through the auth guard,
//! validate inbound DTOs, convert to operation parameters, call the service
//! layer, and map domain models back to response DTOs.

pub mod chat;
pub mod event;
pub mod notification;
pub mod participant;
