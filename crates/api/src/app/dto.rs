use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use storefront_catalog::{Product, ResultEnvelope};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

// -------------------------
// Response shaping
// -------------------------

/// `GET /products` answers with a bare array unless the caller asked for a page.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProductList<'a> {
    All(Vec<&'a Product>),
    Page(ResultEnvelope<&'a Product>),
}

impl<'a> ProductList<'a> {
    pub fn from_page(page: ResultEnvelope<&'a Product>, paged: bool) -> Self {
        if paged {
            ProductList::Page(page)
        } else {
            ProductList::All(page.data)
        }
    }
}

/// True when the raw query names a pagination parameter, even with a value
/// that later falls back to its default.
pub fn pagination_supplied(raw: &HashMap<String, String>) -> bool {
    raw.contains_key("start") || raw.contains_key("limit")
}
