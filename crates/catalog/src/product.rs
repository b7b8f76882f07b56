use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use storefront_core::ProductId;

use crate::price;

/// An immutable, shareable view of the whole catalog.
///
/// Every query runs against one snapshot; nothing in this crate mutates it.
pub type CatalogSnapshot = Arc<[Product]>;

/// A catalog product as stored in the dataset.
///
/// Fields the engine does not interpret are kept in `extra` and written back
/// unchanged, so responses mirror the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub color: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_prices: Option<Vec<PriceValue>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        product_type: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            product_type: product_type.into(),
            color: color.into(),
            variants: Vec::new(),
            variant_prices: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants = variants.into_iter().collect();
        self
    }

    pub fn with_variant_prices<P: Into<PriceValue>>(mut self, prices: impl IntoIterator<Item = P>) -> Self {
        self.variant_prices = Some(prices.into_iter().map(Into::into).collect());
        self
    }

    /// Size labels carried by this product's variants, in stored order.
    pub fn sizes(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.variants.iter().filter_map(Variant::size)
    }

    /// Lowest price this product sells at, if one can be derived.
    pub fn min_price(&self) -> Option<f64> {
        price::min_price(self)
    }
}

/// One entry of a product's `variants` list.
///
/// Datasets use bare size labels (`"M"`, or numbers such as `42`) or objects
/// such as `{"size": "M", "price": "19.99"}`; the shapes may be mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    Label(String),
    Numeric(Number),
    Detailed(VariantDetail),
}

impl Variant {
    pub fn label(size: impl Into<String>) -> Self {
        Self::Label(size.into())
    }

    pub fn priced(size: impl Into<String>, price: impl Into<PriceValue>) -> Self {
        Self::Detailed(VariantDetail {
            size: Some(size.into()),
            price: Some(price.into()),
            extra: Map::new(),
        })
    }

    /// Size label; numeric labels are rendered as their JSON text.
    pub fn size(&self) -> Option<Cow<'_, str>> {
        match self {
            Variant::Label(size) => Some(Cow::Borrowed(size.as_str())),
            Variant::Numeric(size) => Some(Cow::Owned(size.to_string())),
            Variant::Detailed(detail) => detail.size.as_deref().map(Cow::Borrowed),
        }
    }

    /// Parsed price of this variant; label variants carry none.
    pub fn price(&self) -> Option<f64> {
        match self {
            Variant::Label(_) | Variant::Numeric(_) => None,
            Variant::Detailed(detail) => detail.price.as_ref().and_then(PriceValue::to_f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A price as stored: either a JSON number or text such as `"19.99"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Numeric value, or `None` when the stored text has no numeric prefix.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            PriceValue::Number(n) => Some(*n),
            PriceValue::Text(s) => price::parse_leading_float(s),
        };
        value.filter(|v| v.is_finite())
    }
}

impl From<f64> for PriceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PriceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PriceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_label_variants() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "title": "Tee",
            "description": "Cotton tee",
            "category": "Shirts",
            "type": "T-Shirt",
            "color": "Red",
            "variants": ["S", "M", "L"],
            "variantPrices": [19.99, 21.5]
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.product_type, "T-Shirt");
        assert_eq!(product.sizes().collect::<Vec<_>>(), vec!["S", "M", "L"]);
        assert_eq!(product.variant_prices, Some(vec![PriceValue::from(19.99), PriceValue::from(21.5)]));
        assert_eq!(product.min_price(), Some(19.99));
    }

    #[test]
    fn deserializes_priced_variants_with_text_and_number_prices() {
        let product: Product = serde_json::from_value(json!({
            "id": 2,
            "title": "Hoodie",
            "description": "",
            "category": "Outerwear",
            "type": "Hoodie",
            "color": "Black",
            "variants": [
                {"size": "M", "price": "49.50", "sku": "H-M"},
                {"size": "L", "price": 52}
            ]
        }))
        .unwrap();

        assert_eq!(product.variants[0].price(), Some(49.5));
        assert_eq!(product.variants[1].price(), Some(52.0));
        assert_eq!(product.sizes().collect::<Vec<_>>(), vec!["M", "L"]);
        assert!(product.variant_prices.is_none());
    }

    #[test]
    fn unknown_fields_round_trip_unchanged() {
        let stored = json!({
            "id": 3,
            "title": "Cap",
            "description": "Wool cap",
            "category": "Accessories",
            "type": "Hat",
            "color": "Grey",
            "variants": ["ONE"],
            "image": "https://cdn.example.com/cap.png",
            "tags": ["winter"]
        });

        let product: Product = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(product.extra.get("image"), stored.get("image"));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn accepts_numeric_sizes_and_text_variant_prices() {
        let stored = json!({
            "id": 5,
            "title": "Boot",
            "description": "",
            "category": "Shoes",
            "type": "Boot",
            "color": "Brown",
            "variants": [40, 41, "42"],
            "variantPrices": ["89.90", 75]
        });

        let product: Product = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(product.sizes().collect::<Vec<_>>(), vec!["40", "41", "42"]);
        assert_eq!(product.min_price(), Some(75.0));
        assert_eq!(serde_json::to_value(&product).unwrap(), stored);
    }

    #[test]
    fn missing_title_is_rejected() {
        let res = serde_json::from_value::<Product>(json!({
            "id": 4,
            "description": "",
            "category": "Shoes",
            "type": "Sneaker",
            "color": "White"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn builder_fills_defaults() {
        let product = Product::new(9, "Sock", "Socks", "Sock", "Blue");
        assert_eq!(product.id, ProductId::new(9));
        assert!(product.description.is_empty());
        assert!(product.variants.is_empty());
        assert_eq!(product.min_price(), None);
    }
}
