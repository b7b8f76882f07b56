use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_catalog::{query, FacetKind};

use crate::app::errors;
use crate::app::services::CatalogServices;

pub fn router() -> Router {
    Router::new()
        .route("/colors", get(colors))
        .route("/sizes", get(sizes))
        .route("/categories", get(categories))
        .route("/types", get(types))
        .route("/facets/:kind", get(facet_by_name))
}

pub async fn colors(Extension(services): Extension<Arc<CatalogServices>>) -> axum::response::Response {
    facet_response(&services, FacetKind::Color).await
}

pub async fn sizes(Extension(services): Extension<Arc<CatalogServices>>) -> axum::response::Response {
    facet_response(&services, FacetKind::Size).await
}

pub async fn categories(Extension(services): Extension<Arc<CatalogServices>>) -> axum::response::Response {
    facet_response(&services, FacetKind::Category).await
}

pub async fn types(Extension(services): Extension<Arc<CatalogServices>>) -> axum::response::Response {
    facet_response(&services, FacetKind::Type).await
}

/// GET /facets/:kind where kind is color, size, category or type (plurals accepted).
pub async fn facet_by_name(
    Extension(services): Extension<Arc<CatalogServices>>,
    Path(kind): Path<String>,
) -> axum::response::Response {
    match kind.parse::<FacetKind>() {
        Ok(kind) => facet_response(&services, kind).await,
        Err(msg) => errors::json_error(StatusCode::NOT_FOUND, "unknown_facet", msg),
    }
}

async fn facet_response(services: &CatalogServices, kind: FacetKind) -> axum::response::Response {
    let products = match services.snapshot().await {
        Ok(p) => p,
        Err(e) => return errors::load_error_to_response(e),
    };
    (StatusCode::OK, Json(query::facet(&products, kind))).into_response()
}
