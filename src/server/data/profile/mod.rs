pub mod verification_code;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Replaces the stored password hash of a profile
    pub async fn update_password_hash(
        &self,
        profile: entity::profile::Model,
        password_hash: String,
    ) -> Result<entity::profile::Model, DbErr> {
        let mut profile_am = profile.into_active_model();
        profile_am.password_hash = ActiveValue::Set(password_hash);

        profile_am.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    #[tokio::test]
    async fn finds_profile_by_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Profile)
            .with_mock_profile("member@example.com")
            .build()
            .await?;

        let repo = ProfileRepository::new(&test.db);

        assert!(repo.get_by_email("member@example.com").await?.is_some());
        assert!(repo.get_by_email("stranger@example.com").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn replaces_password_hash() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Profile)
            .with_mock_profile("member@example.com")
            .build()
            .await?;

        let repo = ProfileRepository::new(&test.db);
        let profile = repo.get_by_email("member@example.com").await?.unwrap();
        let updated = repo
            .update_password_hash(profile, "new-hash".to_string())
            .await?;

        assert_eq!(updated.password_hash, "new-hash");

        Ok(())
    }
}
