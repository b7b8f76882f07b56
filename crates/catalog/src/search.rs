//! Free-text search: case-insensitive substring containment.

use storefront_core::{QueryError, QueryResult};

use crate::product::Product;

/// A lower-cased search needle, validated non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Builds a term from raw request text. Absent or empty text is rejected;
    /// whitespace is kept as typed.
    pub fn parse(raw: Option<&str>) -> QueryResult<Self> {
        match raw {
            Some(q) if !q.is_empty() => Ok(Self(q.to_lowercase())),
            _ => Err(QueryError::missing("q")),
        }
    }

    /// True when any of title, description, category or type contains the term.
    pub fn matches(&self, product: &Product) -> bool {
        [
            &product.title,
            &product.description,
            &product.category,
            &product.product_type,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Products matching `term`, in catalog order.
pub fn search<'a>(products: &'a [Product], term: &SearchTerm) -> Vec<&'a Product> {
    products.iter().filter(|p| term.matches(p)).collect()
}
