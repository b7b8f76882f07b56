//! Filter predicate engine.
//!
//! Every condition is optional; an absent condition always holds. A product is
//! kept only when all supplied conditions hold, and kept products stay in
//! catalog order.

use crate::product::Product;
use crate::search::SearchTerm;

/// Strongly-typed filter criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive exact color.
    pub color: Option<String>,
    /// Size label; compared upper-cased against every variant size.
    pub size: Option<String>,
    /// Case-insensitive exact category.
    pub category: Option<String>,
    /// Case-insensitive exact product type.
    pub product_type: Option<String>,
    /// Inclusive lower bound on the product's minimum price.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on the product's minimum price.
    pub max_price: Option<f64>,
    /// Free-text term that must also match.
    pub search: Option<SearchTerm>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        text_matches(self.color.as_deref(), &product.color)
            && self.size_matches(product)
            && text_matches(self.category.as_deref(), &product.category)
            && text_matches(self.product_type.as_deref(), &product.product_type)
            && self.price_matches(product)
            && self.search.as_ref().is_none_or(|term| term.matches(product))
    }

    /// Products satisfying every active condition, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    fn size_matches(&self, product: &Product) -> bool {
        let Some(size) = self.size.as_deref() else {
            return true;
        };
        let wanted = size.to_uppercase();
        product.sizes().any(|s| s.to_uppercase() == wanted)
    }

    // Unpriced products fail any active bound.
    fn price_matches(&self, product: &Product) -> bool {
        if self.min_price.is_none() && self.max_price.is_none() {
            return true;
        }
        match product.min_price() {
            Some(price) => {
                self.min_price.is_none_or(|min| price >= min)
                    && self.max_price.is_none_or(|max| price <= max)
            }
            None => false,
        }
    }
}

fn text_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|w| w.to_lowercase() == actual.to_lowercase())
}
