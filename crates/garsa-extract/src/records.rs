//! Assembly of [`ProductRecord`]s from normalized fragments.
//!
//! One product (one name, one base price) fans out into one record per
//! weight option, each resolved independently against the original base
//! price. Nothing here errors: a product without a parseable price is
//! dropped, a weight without a recognizable unit degrades to an `"N/A"`
//! price-per-kg. Upstream page structure is unreliable and partial data
//! beats no data.

use serde::Deserialize;
use tracing::{debug, warn};

use garsa_core::{ProductFragments, ProductRecord};

use crate::format::{format_price, format_price_per_kg, PerKgStyle};
use crate::parse::{extract_embedded_price, parse_price, parse_weight, EmbeddedPrice};

/// Minimum absolute difference before an embedded price is believed over the
/// base price. Inherited from the source pipeline; anything at or below it
/// is treated as floating-point noise on the same price.
pub const DEFAULT_PRICE_OVERRIDE_TOLERANCE: f64 = 0.01;

/// Label substituted when a product exposes no weight options: absence of
/// package-size information means "sold by the kilogram".
pub const DEFAULT_WEIGHT_LABEL: &str = "1 kg";

/// Tunables for record assembly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Tie-break threshold between the base price and an embedded
    /// per-option price; see [`DEFAULT_PRICE_OVERRIDE_TOLERANCE`].
    pub price_override_tolerance: f64,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            price_override_tolerance: DEFAULT_PRICE_OVERRIDE_TOLERANCE,
        }
    }
}

/// Builds one [`ProductRecord`] per weight option.
///
/// - Empty `weight_texts` substitutes a single [`DEFAULT_WEIGHT_LABEL`]
///   option.
/// - `base_price` of `None` (unparseable upstream) returns an empty vec;
///   a product with no price is not emitted.
/// - An embedded price differing from `base_price` by more than the
///   configured tolerance supersedes it for that record only — later
///   options still resolve against the original base price.
/// - Output order equals input option order.
#[must_use]
pub fn build_records(
    name: &str,
    base_price: Option<f64>,
    weight_texts: &[String],
    config: &BuilderConfig,
) -> Vec<ProductRecord> {
    let Some(base_price) = base_price else {
        warn!(product = name, "no parseable price, dropping product");
        return Vec::new();
    };

    let default_option = [DEFAULT_WEIGHT_LABEL.to_owned()];
    let options: &[String] = if weight_texts.is_empty() {
        debug!(product = name, "no weight options, assuming sold per kg");
        &default_option
    } else {
        weight_texts
    };

    options
        .iter()
        .map(|label| {
            let resolved = resolve_price(name, label, base_price, config);
            let weight = parse_weight(label);
            if weight.is_none() {
                debug!(product = name, weight = %label, "weight label has no recognizable unit");
            }
            ProductRecord {
                name: name.to_owned(),
                price: format_price(resolved),
                weight: label.clone(),
                price_per_kg: format_price_per_kg(resolved, weight.as_ref(), PerKgStyle::Bare),
            }
        })
        .collect()
}

/// Resolves one weight option's price against the base price.
fn resolve_price(name: &str, label: &str, base_price: f64, config: &BuilderConfig) -> f64 {
    match extract_embedded_price(label) {
        EmbeddedPrice::Price(embedded)
            if (embedded - base_price).abs() > config.price_override_tolerance =>
        {
            debug!(
                product = name,
                weight = %label,
                base_price,
                embedded,
                "embedded price overrides base price"
            );
            embedded
        }
        // Within tolerance: same price, keep the base.
        EmbeddedPrice::Price(_) | EmbeddedPrice::Absent => base_price,
        EmbeddedPrice::Unparseable => {
            debug!(product = name, weight = %label, "unreadable embedded price, keeping base");
            base_price
        }
    }
}

/// The fetcher-facing boundary: raw fragments in, records out.
///
/// A missing `price_text` behaves exactly like an unparseable one — the
/// product is dropped.
#[must_use]
pub fn extract_product(fragments: &ProductFragments, config: &BuilderConfig) -> Vec<ProductRecord> {
    let base_price = fragments.price_text.as_deref().and_then(parse_price);
    build_records(&fragments.name, base_price, &fragments.weight_texts, config)
}

/// Batch variant of [`extract_product`], preserving product order.
#[must_use]
pub fn extract_products<'a, I>(fragments: I, config: &BuilderConfig) -> Vec<ProductRecord>
where
    I: IntoIterator<Item = &'a ProductFragments>,
{
    fragments
        .into_iter()
        .flat_map(|f| extract_product(f, config))
        .collect()
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
