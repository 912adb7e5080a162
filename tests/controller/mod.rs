//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the way the router
//! would after a successful extraction.

mod account;
mod assignment;
mod audit;
mod auth;
mod catalog;
mod content;
mod order;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use slotshare_test_utils::prelude::*;

use crate::util::TestContextExt;

async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Renders a handler result the way axum would
fn respond<R: IntoResponse, E: IntoResponse>(result: Result<R, E>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

fn status_of<R: IntoResponse, E: IntoResponse>(result: Result<R, E>) -> StatusCode {
    respond(result).status()
}
