//! Minimum-price resolution.
//!
//! A product's representative price is the lowest of its `variantPrices` when
//! that list is present and non-empty; otherwise the lowest price parsed out of
//! its variant entries. Entries without a usable price are skipped. A product
//! with no usable price at all resolves to `None` ("unpriced").

use crate::product::{PriceValue, Product, Variant};

/// Lowest price of `product`, or `None` when no price can be derived.
pub fn min_price(product: &Product) -> Option<f64> {
    match product.variant_prices.as_deref() {
        Some(prices) if !prices.is_empty() => lowest(prices.iter().filter_map(PriceValue::to_f64)),
        _ => lowest(product.variants.iter().filter_map(Variant::price)),
    }
}

fn lowest(prices: impl Iterator<Item = f64>) -> Option<f64> {
    prices.filter(|p| p.is_finite()).reduce(f64::min)
}

/// Lenient float reader for user- and dataset-supplied text.
///
/// Skips leading whitespace and reads the longest numeric prefix, so
/// `"29.99 USD"` reads as `29.99`. Text that does not start with a number
/// (`"$5"`, `"free"`, `""`) yields `None`.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = numeric_prefix_len(text.as_bytes())?;
    text[..end].parse().ok()
}

/// Length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run, in one
/// forward pass. `None` when the mantissa has no digit at all.
fn numeric_prefix_len(bytes: &[u8]) -> Option<usize> {
    let skip_digits = |from: usize| {
        from + bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = skip_digits(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(end)
}
