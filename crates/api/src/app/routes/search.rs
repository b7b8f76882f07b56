use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_catalog::query;

use crate::app::{dto, errors};
use crate::app::services::CatalogServices;

pub fn router() -> Router {
    Router::new().route("/search", get(search_products))
}

/// GET /search?q=keyword
///
/// Case-insensitive substring match on title, description, category and type.
pub async fn search_products(
    Extension(services): Extension<Arc<CatalogServices>>,
    Query(params): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let products = match services.snapshot().await {
        Ok(p) => p,
        Err(e) => return errors::load_error_to_response(e),
    };

    match query::search(&products, params.q.as_deref()) {
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(e) => errors::query_error_to_response(e),
    }
}
