//! Password reset and change for customer profiles.
//!
//! A reset is a two-step flow: a six digit code is issued to the profile's
//! email and must be presented, unused and unexpired, together with the new
//! password. Only the newest code issued for an email is accepted.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::{ChangePasswordDto, ResetPasswordDto, VerifyCodeDto},
    server::{
        data::profile::{verification_code::VerificationCodeRepository, ProfileRepository},
        error::{auth::AuthError, Error},
        service::require_text,
        util::{
            mail::Mailer,
            password::{hash_password, validate_new_password, verify_password},
        },
    },
};

/// Generates a zero-padded six digit verification code.
fn generate_code() -> String {
    let code: u32 = rand::rng().random_range(0..1_000_000);

    format!("{:06}", code)
}

pub struct PasswordService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    code_ttl: Duration,
}

impl<'a> PasswordService<'a> {
    /// Creates a new instance of [`PasswordService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `mailer` - Delivers issued verification codes
    /// - `code_ttl_minutes` - Lifetime of issued verification codes
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer, code_ttl_minutes: i64) -> Self {
        Self {
            db,
            mailer,
            code_ttl: Duration::minutes(code_ttl_minutes),
        }
    }

    /// Issues a verification code for the profile registered under `email`.
    ///
    /// # Returns
    /// - `Ok(())` - Code stored and handed to the mailer
    /// - `Err(Error::AuthError(ProfileNotFound))` - No profile uses this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn request_code(&self, email: &str) -> Result<(), Error> {
        require_text("email", email)?;

        let email = email.trim();
        if ProfileRepository::new(self.db)
            .get_by_email(email)
            .await?
            .is_none()
        {
            return Err(AuthError::ProfileNotFound(email.to_string()).into());
        }

        let code = generate_code();
        let expires_at = Utc::now().naive_utc() + self.code_ttl;

        VerificationCodeRepository::new(self.db)
            .create(email, &code, expires_at)
            .await?;

        self.mailer.send_verification_code(email, &code).await?;

        Ok(())
    }

    /// Checks a code without consuming it.
    ///
    /// # Returns
    /// - `Ok(())` - Code matches the newest valid code for the email
    /// - `Err(Error::AuthError(InvalidVerificationCode))` - Wrong, used, expired or missing code
    pub async fn verify_code(&self, dto: VerifyCodeDto) -> Result<(), Error> {
        self.find_matching_code(self.db, &dto.email, &dto.code)
            .await?;

        Ok(())
    }

    /// Sets a new password after verifying and consuming a reset code.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced, code marked used
    /// - `Err(Error::AuthError(PasswordTooShort))` - New password too short
    /// - `Err(Error::AuthError(InvalidVerificationCode))` - Code not accepted
    /// - `Err(Error::AuthError(ProfileNotFound))` - Profile removed since the code was issued
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn reset_password(&self, dto: ResetPasswordDto) -> Result<(), Error> {
        validate_new_password(&dto.new_password)?;

        let email = dto.email.trim();
        let txn = self.db.begin().await?;

        let code = self.find_matching_code(&txn, email, &dto.code).await?;

        let profile = ProfileRepository::new(&txn)
            .get_by_email(email)
            .await?
            .ok_or_else(|| AuthError::ProfileNotFound(email.to_string()))?;

        let password_hash = hash_password(&dto.new_password)?;

        VerificationCodeRepository::new(&txn).mark_used(code).await?;
        ProfileRepository::new(&txn)
            .update_password_hash(profile, password_hash)
            .await?;

        txn.commit().await?;

        tracing::info!(email = %email, "Password reset completed");

        Ok(())
    }

    /// Changes a password given the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(Error::AuthError(WrongPassword))` - Current password does not match
    /// - `Err(Error::AuthError(PasswordTooShort))` - New password too short
    /// - `Err(Error::AuthError(ProfileNotFound))` - No profile uses this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn change_password(&self, dto: ChangePasswordDto) -> Result<(), Error> {
        let email = dto.email.trim();
        let profile_repo = ProfileRepository::new(self.db);

        let profile = profile_repo
            .get_by_email(email)
            .await?
            .ok_or_else(|| AuthError::ProfileNotFound(email.to_string()))?;

        if !verify_password(&dto.current_password, &profile.password_hash)? {
            return Err(AuthError::WrongPassword.into());
        }

        validate_new_password(&dto.new_password)?;
        let password_hash = hash_password(&dto.new_password)?;

        profile_repo
            .update_password_hash(profile, password_hash)
            .await?;

        tracing::info!(email = %email, "Password changed");

        Ok(())
    }

    async fn find_matching_code<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        email: &str,
        code: &str,
    ) -> Result<entity::verification_code::Model, Error> {
        let latest = VerificationCodeRepository::new(db)
            .find_latest(email.trim())
            .await?;
        let now = Utc::now().naive_utc();

        match latest {
            Some(latest)
                if !latest.used && latest.expires_at > now && latest.code == code.trim() =>
            {
                Ok(latest)
            }
            _ => Err(AuthError::InvalidVerificationCode.into()),
        }
    }
}
