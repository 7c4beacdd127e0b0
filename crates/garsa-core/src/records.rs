use serde::{Deserialize, Serialize};

use crate::NOT_AVAILABLE;

/// Raw per-product fragments delivered by a page fetcher.
///
/// The fetcher owns all HTML/DOM concerns; by the time data reaches this
/// struct it is plain text. `price_text` is `None` when the page exposed no
/// price element at all — downstream this behaves exactly like an
/// unparseable price string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFragments {
    /// Product display name, e.g. `"Kanēlis"`.
    pub name: String,
    /// Page-level price text, e.g. `"No 1,70€"`.
    pub price_text: Option<String>,
    /// Weight-option labels in page order, e.g. `["100 g (1.70€)", "250 g"]`.
    /// Empty when the page offers no package-size choice.
    #[serde(default)]
    pub weight_texts: Vec<String>,
}

/// One output row: a (product, weight-option) pair with normalized pricing.
///
/// `price` and `price_per_kg` are canonical display strings
/// (`"<euros>.<two-digit-cents>"` or the `"N/A"` sentinel); `weight` keeps
/// the original option label verbatim. Constructed once by the record
/// builder and immutable thereafter; there is no identity beyond the field
/// values, and duplicates are expected when several options share a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    /// Original weight label, preserved for display, e.g. `"250 g"`.
    pub weight: String,
    pub price_per_kg: String,
}

impl ProductRecord {
    /// Returns `true` if the record carries a usable price.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.price != NOT_AVAILABLE
    }

    /// Returns `true` if a price-per-kg could be derived for this record.
    #[must_use]
    pub fn has_price_per_kg(&self) -> bool {
        self.price_per_kg != NOT_AVAILABLE
    }
}
