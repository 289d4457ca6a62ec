//! Domain models for user identity.

/// User roles recognized by the authorization layer.
///
/// Stored as canonical strings in the `user.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Returns the canonical string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses the canonical string form, defaulting unknown values to `User`.
    pub fn parse(value: &str) -> Self {
        match value {
            "ADMIN" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// User identity with profile display fields, as exposed on rosters.
///
/// The password column never leaves the data layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i32,
    pub email: String,
    pub phone: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserSummary {
    /// Combines a user entity with its profile into a summary.
    ///
    /// Profile fields fall back to empty strings when the profile row is
    /// missing, which keeps rosters usable for accounts created before
    /// profile onboarding completed.
    ///
    /// # Arguments
    /// - `user` - The user entity model
    /// - `profile` - The profile entity model, if present
    ///
    /// # Returns
    /// - `UserSummary` - The combined summary
    pub fn from_entities(
        user: entity::user::Model,
        profile: Option<entity::profile::Model>,
    ) -> Self {
        let (username, first_name, last_name) = match profile {
            Some(profile) => (profile.username, profile.first_name, profile.last_name),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            id: user.id,
            email: user.email,
            phone: user.phone,
            username,
            first_name,
            last_name,
        }
    }
}
