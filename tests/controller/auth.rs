use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use slotshare::{
    model::auth::{ChangePasswordDto, RequestCodeDto, ResetPasswordDto},
    server::{
        controller::{
            auth::{change_password, request_verification_code, reset_password},
            util::extract::JsonBody,
        },
        error::Error,
        util::mail::Mailer,
    },
};
use slotshare_test_utils::constant::TEST_PASSWORD;

use super::*;

/// Keeps every issued code instead of delivering it
#[derive(Default)]
struct CapturingMailer {
    codes: Mutex<Vec<String>>,
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send_verification_code(&self, _email: &str, code: &str) -> Result<(), Error> {
        self.codes.lock().unwrap().push(code.to_string());

        Ok(())
    }
}

/// Expect the mailed code to reset the password only once
#[tokio::test]
async fn reset_accepts_mailed_code_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_profile("kim@example.com")
        .build()
        .await?;
    let mailer = Arc::new(CapturingMailer::default());
    let state = test.into_app_state().with_mailer(mailer.clone());

    let issued = request_verification_code(
        State(state.clone()),
        JsonBody(RequestCodeDto {
            email: "kim@example.com".to_string(),
        }),
    )
    .await;
    assert_eq!(status_of(issued), StatusCode::OK);

    let code = mailer.codes.lock().unwrap().pop().unwrap();
    let reset_with = |code: String| ResetPasswordDto {
        email: "kim@example.com".to_string(),
        code,
        new_password: "a-much-longer-secret".to_string(),
    };

    let first = reset_password(State(state.clone()), JsonBody(reset_with(code.clone()))).await;
    assert_eq!(status_of(first), StatusCode::OK);

    let second = reset_password(State(state), JsonBody(reset_with(code))).await;
    assert_eq!(status_of(second), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn request_code_returns_not_found_for_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = request_verification_code(
        State(test.into_app_state()),
        JsonBody(RequestCodeDto {
            email: "nobody@example.com".to_string(),
        }),
    )
    .await;

    assert_eq!(status_of(result), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn reset_accepts_stored_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_profile("kim@example.com")
        .build()
        .await?;
    test.profile()
        .insert_verification_code("kim@example.com", "482913", 10)
        .await?;

    let result = reset_password(
        State(test.into_app_state()),
        JsonBody(ResetPasswordDto {
            email: "kim@example.com".to_string(),
            code: "482913".to_string(),
            new_password: "a-much-longer-secret".to_string(),
        }),
    )
    .await;

    assert_eq!(status_of(result), StatusCode::OK);

    Ok(())
}

/// Expect 401 when the current password does not match
#[tokio::test]
async fn change_password_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_profile("kim@example.com")
        .build()
        .await?;

    let result = change_password(
        State(test.into_app_state()),
        JsonBody(ChangePasswordDto {
            email: "kim@example.com".to_string(),
            current_password: format!("{}-wrong", TEST_PASSWORD),
            new_password: "another-long-secret".to_string(),
        }),
    )
    .await;

    assert_eq!(status_of(result), StatusCode::UNAUTHORIZED);

    Ok(())
}
