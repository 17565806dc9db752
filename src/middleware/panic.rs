use crate::model::errors::ServerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;

/// Turns a panic that escaped a handler into a JSON 500.
pub fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let error = if let Some(message) = panic.downcast_ref::<String>() {
        ServerError::from(format!("internal error: {}", message))
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        ServerError::from(format!("internal error: {}", message))
    } else {
        ServerError::from("internal error")
    };
    tracing::error!("Handler panicked: {}", error.error);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
}
