use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn profile(&self) -> ProfileFixtures<'_> {
        ProfileFixtures { test: self }
    }
}

pub struct ProfileFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ProfileFixtures<'a> {
    /// Inserts a profile whose password is [`TEST_PASSWORD`].
    pub async fn insert_profile(&self, email: &str) -> Result<entity::profile::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::Fixture(e.to_string()))?
            .to_string();

        Ok(entity::prelude::Profile::insert(entity::profile::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set("Test Customer".to_string()),
            phone: ActiveValue::Set(None),
            password_hash: ActiveValue::Set(password_hash),
            is_admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Inserts an unused verification code expiring `ttl_minutes` from now.
    ///
    /// A negative `ttl_minutes` yields an already expired code.
    pub async fn insert_verification_code(
        &self,
        email: &str,
        code: &str,
        ttl_minutes: i64,
    ) -> Result<entity::verification_code::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::VerificationCode::insert(entity::verification_code::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                code: ActiveValue::Set(code.to_string()),
                expires_at: ActiveValue::Set(now + Duration::minutes(ttl_minutes)),
                used: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
