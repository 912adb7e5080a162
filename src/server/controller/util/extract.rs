use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON body whose rejection is reported as a 400 `{error}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Path parameters whose rejection is reported as a 400 `{error}`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);

/// Query string whose rejection is reported as a 400 `{error}`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
