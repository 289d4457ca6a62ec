use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: User not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets a user together with their profile
    ///
    /// # Returns
    /// - `Ok(Some((user, profile)))`: The user and their profile, if one exists
    /// - `Ok(None)`: User not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_with_profile(
        &self,
        id: i32,
    ) -> Result<Option<(entity::user::Model, Option<entity::profile::Model>)>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Profile)
            .one(self.db)
            .await
    }
}
