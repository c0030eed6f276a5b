use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user using the values of [`factory::mock_user_model`]
    pub async fn insert_mock_user(&self, user_id: i32) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(user_id);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                id: ActiveValue::Set(user.id),
                username: ActiveValue::Set(user.username),
                email: ActiveValue::Set(user.email),
                password: ActiveValue::Set(user.password),
                first_name: ActiveValue::Set(user.first_name),
                last_name: ActiveValue::Set(user.last_name),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn user_exists(&self, user_id: i32) -> Result<bool, TestError> {
        Ok(entity::prelude::User::find_by_id(user_id)
            .one(&self.setup.db)
            .await?
            .is_some())
    }
}
