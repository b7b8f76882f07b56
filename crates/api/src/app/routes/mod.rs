use axum::Router;

pub mod facets;
pub mod products;
pub mod search;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(products::router())
        .merge(search::router())
        .merge(facets::router())
}
