//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities (and their
//! profiles) with sensible defaults, reducing boilerplate in tests. The factory
//! supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios. Every built
/// user gets a profile row as well, since display names come from profiles.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let (user, profile) = UserFactory::new(&db)
///     .email("alice@example.com")
///     .first_name("Alice")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    phone: Option<String>,
    role: String,
    username: String,
    first_name: String,
    last_name: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - phone: `None`
    /// - role: `"USER"`
    /// - username: `"user{id}"`
    /// - first_name: `"User{id}"`
    /// - last_name: `"Test"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            phone: None,
            role: "USER".to_string(),
            username: format!("user{}", id),
            first_name: format!("User{}", id),
            last_name: "Test".to_string(),
        }
    }

    /// Sets the email address for the user.
    ///
    /// # Arguments
    /// - `email` - Unique email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the phone number for the user.
    ///
    /// # Arguments
    /// - `phone` - Optional phone number
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the role for the user.
    ///
    /// # Arguments
    /// - `role` - Role string (`"USER"` or `"ADMIN"`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the profile first name for the user.
    ///
    /// # Arguments
    /// - `first_name` - Display first name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the profile last name for the user.
    ///
    /// # Arguments
    /// - `last_name` - Display last name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the user and profile entities into the database.
    ///
    /// # Returns
    /// - `Ok((entity::user::Model, entity::profile::Model))` - Created entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::user::Model, entity::profile::Model), DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password: ActiveValue::Set("hashed-password".to_string()),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let profile = entity::profile::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            username: ActiveValue::Set(self.username),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((user, profile))
    }
}

/// Creates a user (with profile) using default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((entity::user::Model, entity::profile::Model))` - Created entities
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let (user, profile) = create_user(&db).await?;
/// ```
pub async fn create_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::profile::Model), DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific profile first name.
///
/// Shorthand for `UserFactory::new(db).first_name(first_name).build().await`.
/// Useful for attendance-ordering tests that need deterministic names.
///
/// # Arguments
/// - `db` - Database connection
/// - `first_name` - Display first name for the profile
///
/// # Returns
/// - `Ok((entity::user::Model, entity::profile::Model))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_name(
    db: &DatabaseConnection,
    first_name: impl Into<String>,
) -> Result<(entity::user::Model, entity::profile::Model), DbErr> {
    UserFactory::new(db).first_name(first_name).build().await
}
