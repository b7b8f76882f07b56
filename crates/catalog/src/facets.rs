//! Facet extraction: distinct field values across the catalog.

use std::collections::HashSet;
use std::str::FromStr;

use crate::product::Product;

/// Which product field a facet enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Color,
    Size,
    Category,
    Type,
}

impl FacetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::Color => "color",
            FacetKind::Size => "size",
            FacetKind::Category => "category",
            FacetKind::Type => "type",
        }
    }
}

impl core::fmt::Display for FacetKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts singular and plural spellings (`color`, `colors`, `categories`...).
impl FromStr for FacetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "color" | "colors" => Ok(FacetKind::Color),
            "size" | "sizes" => Ok(FacetKind::Size),
            "category" | "categories" => Ok(FacetKind::Category),
            "type" | "types" => Ok(FacetKind::Type),
            other => Err(format!("unknown facet: {other}")),
        }
    }
}

/// Distinct values of `kind` across `products`.
///
/// Values are compared exactly (no case folding). The returned list keeps the
/// order in which each value first appears, but callers should treat it as a set.
pub fn facet(products: &[Product], kind: FacetKind) -> Vec<String> {
    match kind {
        FacetKind::Color => distinct_colors(products),
        FacetKind::Size => distinct_sizes(products),
        FacetKind::Category => distinct_categories(products),
        FacetKind::Type => distinct_types(products),
    }
}

pub fn distinct_colors(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.color.as_str()))
}

/// Flattens every product's variant sizes before deduplicating.
pub fn distinct_sizes(products: &[Product]) -> Vec<String> {
    distinct(products.iter().flat_map(|p| p.sizes()))
}

pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.category.as_str()))
}

pub fn distinct_types(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.product_type.as_str()))
}

fn distinct<S: AsRef<str>>(values: impl Iterator<Item = S>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .map(|v| v.as_ref().to_string())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
