use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::Role,
    service::auth::TokenService,
};

pub enum Permission {
    Admin,
    EventOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingCredentials)?;
        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if Role::parse(&user.role) != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::EventOwner(event_id) => {
                    let event = EventRepository::new(self.db)
                        .get_by_id(*event_id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

                    if event.owner_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted an owner-only action on event {}",
                                event_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the bearer token from the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
