/**
 * Error Conversion
 *
 * Converts `ApiError` values into HTTP responses. Client errors render the
 * field-keyed JSON maps the API promises; infrastructure errors are logged
 * here and degraded to generic bodies so internal detail never reaches the
 * caller.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};

use crate::backend::error::types::ApiError;

/// Build a one-entry JSON object, `{field: message}`
fn field_body(field: &str, message: &str) -> Value {
    let mut map = Map::new();
    map.insert(field.to_owned(), Value::String(message.to_owned()));
    Value::Object(map)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => {
                return (status, Json(errors)).into_response();
            }
            ApiError::NotFound { field, message } => field_body(field, &message),
            ApiError::Conflict { field, message, .. } => field_body(field, &message),
            ApiError::Unauthorized => field_body("error", "Unauthorized"),
            ApiError::Forbidden { message } => field_body("notauthorized", &message),
            ApiError::Database(err) => {
                tracing::error!("store error degraded to {}: {:?}", status, err);
                field_body("error", "Resource not found")
            }
            ApiError::PasswordHash(err) => {
                tracing::error!("password hashing error: {:?}", err);
                field_body("error", "Internal server error")
            }
            ApiError::Token(err) => {
                tracing::error!("token signing error: {:?}", err);
                field_body("error", "Internal server error")
            }
        };

        (status, Json(body)).into_response()
    }
}
