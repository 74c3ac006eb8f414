use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user built from [`factory::mock_user_model`]
    pub async fn insert_mock_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        let user = factory::mock_user_model(0, username);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(user.email),
                username: ActiveValue::Set(user.username),
                password: ActiveValue::Set(user.password),
                is_active: ActiveValue::Set(user.is_active),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
