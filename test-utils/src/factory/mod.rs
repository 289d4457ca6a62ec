//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let event = factory::event::create_event(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (owner, _profile, event) = factory::helpers::create_event_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let event = factory::event::EventFactory::new(&db, owner.id)
//!     .name("Garden Party")
//!     .target_date(Utc::now() + chrono::Duration::days(2))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities (optionally with profiles)
//! - `event` - Create event entities
//! - `participant` - Create event participant entities
//! - `notification` - Create notification entities
//! - `chat` - Create chat room and message entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod chat;
pub mod event;
pub mod helpers;
pub mod notification;
pub mod participant;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use chat::{create_chat_room, create_message};
pub use event::create_event;
pub use notification::create_notification;
pub use participant::create_participant;
pub use user::{create_user, create_user_with_name};
