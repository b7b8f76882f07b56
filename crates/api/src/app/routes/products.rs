use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_catalog::{query, QueryParameters};
use storefront_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::CatalogServices;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/filter", get(filter_products))
        .route("/product/:id", get(get_product))
}

/// GET /products?start=0&limit=20
///
/// Bare array of every product, or a `{total, start, limit, data}` page when
/// `start` or `limit` is supplied.
pub async fn list_products(
    Extension(services): Extension<Arc<CatalogServices>>,
    Query(raw): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let products = match services.snapshot().await {
        Ok(p) => p,
        Err(e) => return errors::load_error_to_response(e),
    };

    let params = QueryParameters::from_pairs(&raw);
    let page = query::list_all(&products, &params.pagination());
    let body = dto::ProductList::from_page(page, dto::pagination_supplied(&raw));
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<CatalogServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::query_error_to_response(e),
    };
    let products = match services.snapshot().await {
        Ok(p) => p,
        Err(e) => return errors::load_error_to_response(e),
    };

    match query::get_by_id(&products, id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::query_error_to_response(e),
    }
}

/// GET /products/filter?color=&size=&category=&type=&minPrice=&maxPrice=&q=&start=&limit=
///
/// Always answers with a page envelope; `total` counts matches before paging.
pub async fn filter_products(
    Extension(services): Extension<Arc<CatalogServices>>,
    Query(raw): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let products = match services.snapshot().await {
        Ok(p) => p,
        Err(e) => return errors::load_error_to_response(e),
    };

    let params = QueryParameters::from_pairs(&raw);
    let page = query::filter(&products, &params);
    tracing::debug!(total = page.total, returned = page.data.len(), "filter evaluated");
    (StatusCode::OK, Json(page)).into_response()
}
