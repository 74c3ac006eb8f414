use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::{
        api::MessageDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{api::ApiError, Error},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user.
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::ApiError(ApiError::NotFound))` - No user with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(user) => Ok(UserDto::from(user)),
            None => Err(ApiError::not_found("User", user_id).into()),
        }
    }

    /// Creates a new user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user with its assigned ID
    /// - `Err(Error::ApiError(ApiError::Conflict))` - Username or email already in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let username = user.username.clone();
        let user = user_repo
            .create(user)
            .await
            .map_err(|e| unique_violation_to_conflict(e, &username))?;

        tracing::info!(user_id = %user.id, "Created user {}", user.username);

        Ok(UserDto::from(user))
    }

    /// Deletes a user, favorites referencing the user are kept.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Confirmation naming the deleted user
    /// - `Err(Error::ApiError(ApiError::NotFound))` - No user with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user(&self, user_id: i32) -> Result<MessageDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(ApiError::not_found("User", user_id).into());
        };

        // A concurrent delete may have removed the record after the lookup
        if user_repo.delete(user.id).await?.rows_affected == 0 {
            return Err(ApiError::not_found("User", user_id).into());
        }

        tracing::info!(user_id = %user.id, "Deleted user {}", user.username);

        Ok(MessageDto::new(format!(
            "User {} was successfully deleted",
            user.username
        )))
    }
}

fn unique_violation_to_conflict(err: DbErr, username: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::Conflict(format!(
            "A user with the username {} or the same email already exists",
            username
        ))
        .into(),
        _ => err.into(),
    }
}
