use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::QueryError;
use storefront_infra::LoadError;

pub fn query_error_to_response(err: QueryError) -> axum::response::Response {
    match err {
        QueryError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        QueryError::MissingParameter(name) => json_error(
            StatusCode::BAD_REQUEST,
            "missing_parameter",
            format!("query parameter {name} is required"),
        ),
    }
}

/// Load failures are server-side: log the cause, keep paths out of the body.
pub fn load_error_to_response(err: LoadError) -> axum::response::Response {
    tracing::error!(error = %err, "catalog load failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "catalog_unavailable",
        "the product catalog could not be loaded",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
