//! Request parameter parsing.
//!
//! The HTTP layer hands over raw `name -> text` pairs; this module turns them
//! into typed values once, so the engine never sees raw text. Empty values
//! count as absent. Numbers that fail to parse are dropped (logged at debug)
//! and the corresponding default applies. Indexes too large for `usize`
//! saturate instead, and price bounds keep infinities.

use std::num::IntErrorKind;

use crate::filter::ProductFilter;
use crate::pagination::Pagination;
use crate::price::parse_leading_float;
use crate::search::SearchTerm;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    pub color: Option<String>,
    pub size: Option<String>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub start: Option<usize>,
    pub limit: Option<usize>,
    pub q: Option<String>,
}

impl QueryParameters {
    /// Parses raw query pairs. Unknown names are ignored; for repeated names
    /// the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (name, value) in pairs {
            let (name, value) = (name.as_ref(), value.as_ref());
            if value.is_empty() {
                continue;
            }
            match name {
                "color" => params.color = Some(value.to_string()),
                "size" => params.size = Some(value.to_string()),
                "category" => params.category = Some(value.to_string()),
                "type" => params.product_type = Some(value.to_string()),
                "minPrice" | "min_price" => params.min_price = parse_price(name, value),
                "maxPrice" | "max_price" => params.max_price = parse_price(name, value),
                "start" => params.start = parse_index(name, value),
                "limit" => params.limit = parse_index(name, value),
                "q" => params.q = Some(value.to_string()),
                _ => {}
            }
        }
        params
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            color: self.color.clone(),
            size: self.size.clone(),
            category: self.category.clone(),
            product_type: self.product_type.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            search: self.q.as_deref().and_then(|q| SearchTerm::parse(Some(q)).ok()),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.start, self.limit)
    }
}

fn parse_price(name: &str, value: &str) -> Option<f64> {
    let parsed = parse_leading_float(value);
    if parsed.is_none() {
        tracing::debug!(parameter = name, value, "ignoring non-numeric price bound");
    }
    parsed
}

fn parse_index(name: &str, value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(_) => {
            tracing::debug!(parameter = name, value, "ignoring non-numeric pagination value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_all_known_parameters() {
        let params = QueryParameters::from_pairs([
            ("color", "Red"),
            ("size", "m"),
            ("category", "Shoes"),
            ("type", "Sneaker"),
            ("minPrice", "10"),
            ("maxPrice", "99.5"),
            ("start", "2"),
            ("limit", "3"),
            ("q", "run"),
        ]);

        assert_eq!(params.color.as_deref(), Some("Red"));
        assert_eq!(params.size.as_deref(), Some("m"));
        assert_eq!(params.product_type.as_deref(), Some("Sneaker"));
        assert_eq!(params.min_price, Some(10.0));
        assert_eq!(params.max_price, Some(99.5));
        assert_eq!(params.pagination(), Pagination::new(Some(2), Some(3)));
        assert_eq!(params.q.as_deref(), Some("run"));
    }

    #[test]
    fn empty_values_are_absent() {
        let params = QueryParameters::from_pairs([("color", ""), ("q", ""), ("start", "")]);
        assert_eq!(params, QueryParameters::default());
        assert_eq!(params.filter(), ProductFilter::default());
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let params = QueryParameters::from_pairs([
            ("minPrice", "cheap"),
            ("maxPrice", "50 dollars"),
            ("start", "-1"),
            ("limit", "ten"),
        ]);
        assert_eq!(params.min_price, None);
        assert_eq!(params.max_price, Some(50.0));
        assert_eq!(params.pagination(), Pagination::default());
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let params = QueryParameters::from_pairs([("brand", "Acme"), ("sort", "price")]);
        assert_eq!(params, QueryParameters::default());
    }

    #[test]
    fn accepts_owned_map_pairs() {
        let mut raw = HashMap::new();
        raw.insert("category".to_string(), "Hats".to_string());
        raw.insert("q".to_string(), "Wool".to_string());

        let filter = QueryParameters::from_pairs(&raw).filter();
        assert_eq!(filter.category.as_deref(), Some("Hats"));
        assert_eq!(filter.search, SearchTerm::parse(Some("wool")).ok());
    }

    #[test]
    fn oversized_indexes_saturate() {
        let params = QueryParameters::from_pairs([
            ("start", "18446744073709551616"),
            ("limit", "99999999999999999999999"),
        ]);
        assert_eq!(params.pagination(), Pagination::new(Some(usize::MAX), Some(usize::MAX)));

        let params = QueryParameters::from_pairs([("start", "12abc")]);
        assert_eq!(params.start, None);
    }

    #[test]
    fn infinite_price_bounds_are_kept() {
        let params = QueryParameters::from_pairs([("minPrice", "1e999"), ("maxPrice", "-1e999")]);
        assert_eq!(params.min_price, Some(f64::INFINITY));
        assert_eq!(params.max_price, Some(f64::NEG_INFINITY));
    }

    #[test]
    fn long_garbage_price_bound_parses_quickly() {
        let n = 40_000;
        let raw = format!("{}{}", "1".repeat(n), "+".repeat(n));

        let started = std::time::Instant::now();
        let params = QueryParameters::from_pairs([("minPrice", raw.as_str())]);
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(params.min_price, Some(f64::INFINITY));
    }
}
