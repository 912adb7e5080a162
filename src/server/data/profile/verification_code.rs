use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct VerificationCodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VerificationCodeRepository<'a, C> {
    /// Creates a new instance of [`VerificationCodeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        email: &str,
        code: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::verification_code::Model, DbErr> {
        let verification_code = entity::verification_code::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            used: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        verification_code.insert(self.db).await
    }

    /// Newest code issued for `email`, whether used or expired
    ///
    /// Only this code can be accepted; issuing a new code supersedes older
    /// ones, so callers must reject it rather than fall back to an earlier row.
    pub async fn find_latest(
        &self,
        email: &str,
    ) -> Result<Option<entity::verification_code::Model>, DbErr> {
        entity::prelude::VerificationCode::find()
            .filter(entity::verification_code::Column::Email.eq(email))
            .order_by_desc(entity::verification_code::Column::CreatedAt)
            .order_by_desc(entity::verification_code::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn mark_used(
        &self,
        verification_code: entity::verification_code::Model,
    ) -> Result<entity::verification_code::Model, DbErr> {
        let mut verification_code_am = verification_code.into_active_model();
        verification_code_am.used = ActiveValue::Set(true);

        verification_code_am.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    mod find_latest {
        use super::*;

        /// Expect the most recently issued code to be returned
        #[tokio::test]
        async fn returns_newest_code() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::VerificationCode)
                .build()
                .await?;
            test.profile()
                .insert_verification_code("member@example.com", "111111", 10)
                .await?;
            let newest = test
                .profile()
                .insert_verification_code("member@example.com", "222222", 10)
                .await?;

            let result = VerificationCodeRepository::new(&test.db)
                .find_latest("member@example.com")
                .await?;

            assert_eq!(result.map(|c| c.id), Some(newest.id));

            Ok(())
        }

        /// Expect a used newest code to be returned instead of an older unused one
        #[tokio::test]
        async fn does_not_fall_back_past_used_code() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::VerificationCode)
                .build()
                .await?;
            test.profile()
                .insert_verification_code("member@example.com", "111111", 10)
                .await?;
            let newest = test
                .profile()
                .insert_verification_code("member@example.com", "222222", 10)
                .await?;

            let repo = VerificationCodeRepository::new(&test.db);
            repo.mark_used(newest.clone()).await?;
            let result = repo.find_latest("member@example.com").await?.unwrap();

            assert_eq!(result.id, newest.id);
            assert!(result.used);

            Ok(())
        }
    }
}
