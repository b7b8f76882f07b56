//! Query engine entry points.
//!
//! Every operation takes the catalog snapshot explicitly and is a pure function
//! of its inputs; whether the snapshot is reloaded per request or shared is the
//! caller's decision.

use storefront_core::{ProductId, QueryError, QueryResult};

use crate::facets::{self, FacetKind};
use crate::pagination::{paginate, Pagination, ResultEnvelope};
use crate::params::QueryParameters;
use crate::product::Product;
use crate::search::{self as matcher, SearchTerm};

/// All products, windowed by `pagination`.
pub fn list_all<'a>(products: &'a [Product], pagination: &Pagination) -> ResultEnvelope<&'a Product> {
    paginate(products.iter().collect(), pagination)
}

/// The product with `id`. With duplicate ids the first stored record wins.
pub fn get_by_id(products: &[Product], id: ProductId) -> QueryResult<&Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or(QueryError::NotFound)
}

/// Products whose text fields contain `q`; fails when `q` is absent or empty.
pub fn search<'a>(products: &'a [Product], q: Option<&str>) -> QueryResult<Vec<&'a Product>> {
    let term = SearchTerm::parse(q)?;
    Ok(matcher::search(products, &term))
}

/// Distinct values of one product field.
pub fn facet(products: &[Product], kind: FacetKind) -> Vec<String> {
    facets::facet(products, kind)
}

/// Products matching every supplied condition, then paginated.
pub fn filter<'a>(products: &'a [Product], params: &QueryParameters) -> ResultEnvelope<&'a Product> {
    let matched = params.filter().apply(products);
    paginate(matched, &params.pagination())
}
