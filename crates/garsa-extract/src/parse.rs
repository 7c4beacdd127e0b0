//! Text normalization for raw price and weight fragments.
//!
//! The three shops format the same information differently: comma or dot
//! decimal separators, a `€` that may trail the amount with or without a
//! space, "No"/"from" prefixes on ranged prices, and weight labels that
//! sometimes quote their own price in parentheses. Everything here returns
//! `Option` or [`EmbeddedPrice`] — malformed text is never an error, it is
//! "no value" that downstream code turns into a dropped record or an `"N/A"`
//! field. See [`crate::records`] for how these compose.

use std::sync::LazyLock;

use regex::Regex;

use garsa_core::{Weight, WeightUnit};

/// First decimal amount in a price string: digits, `.` or `,`, digits.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)[.,](\d+)").expect("valid regex"));

/// Weight value and unit, e.g. `"250 g"`, `"1.5kg"`, `"0,5 KG"`.
static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(kg|g)").expect("valid regex"));

/// Parenthetical price annotation inside a weight label: `"100 g (1.70€)"`.
static EMBEDDED_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)€\s*\)").expect("valid regex"));

/// Weight token embedded in a product name: `"Kanēlis 250g"`.
static NAME_WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(\d+(?:\.\d+)?(?:g|kg))(?:\s+|$)").expect("valid regex"));

/// Result of scanning a weight label for a parenthetical price override.
///
/// The three outcomes are deliberately distinct: a label without any price
/// parenthetical ([`Absent`](EmbeddedPrice::Absent)) is expected and means
/// "use the base price", while a parenthetical whose amount cannot be read
/// ([`Unparseable`](EmbeddedPrice::Unparseable)) is a parse failure that
/// also falls back to the base price but is worth logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmbeddedPrice {
    /// The label carries no price parenthetical.
    Absent,
    /// A price parenthetical is present but its amount is unreadable.
    Unparseable,
    /// The override price quoted for this weight option, in euros.
    Price(f64),
}

/// Parses a raw price string into a euro amount.
///
/// Tolerates (all observed on the live sites):
/// - `,` or `.` as the decimal separator: `"1,70"` / `"1.70"`
/// - a trailing `€`, with or without a space
/// - "from"-price prefixes: `"No 1,70€"` (Latvian), `"from 1.70"`
///
/// Returns `None` when no decimal amount (digits-separator-digits) is
/// present; callers treat that as "no price available" and drop the product.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.replace("No", "").replace("from", "").replace('€', "");
    let caps = PRICE_RE.captures(&cleaned)?;
    format!("{}.{}", &caps[1], &caps[2]).parse().ok()
}

/// Parses a raw weight label into a [`Weight`].
///
/// Matches digits (optional decimal fraction, `.` or `,`), optional
/// whitespace, then `g` or `kg` case-insensitively. Returns `None` when no
/// unit token is found (e.g. `"bulk"`); the record builder renders that as
/// an `"N/A"` price-per-kg, never an error.
#[must_use]
pub fn parse_weight(raw: &str) -> Option<Weight> {
    let caps = WEIGHT_RE.captures(raw)?;
    let value: f64 = caps[1].replace(',', ".").parse().ok()?;
    let unit: WeightUnit = caps[2].parse().ok()?;
    Some(Weight::new(value, unit))
}

/// Scans a weight label for a parenthetical price override,
/// format `"<weight> (<price>€)"`.
///
/// The amount is normalized exactly as [`parse_price`] does. A parenthetical
/// without a `€` sign is not a price annotation and yields
/// [`EmbeddedPrice::Absent`].
#[must_use]
pub fn extract_embedded_price(raw: &str) -> EmbeddedPrice {
    let Some(caps) = EMBEDDED_PRICE_RE.captures(raw) else {
        return EmbeddedPrice::Absent;
    };
    match parse_price(&caps[1]) {
        Some(value) => EmbeddedPrice::Price(value),
        None => EmbeddedPrice::Unparseable,
    }
}

/// Splits a weight token out of a product name.
///
/// garsvielas.lv appends the package size to the display name itself
/// (`"Kanēlis 250g"`); the listing carries no separate weight element.
/// Returns the name truncated at the weight token (trailing whitespace
/// trimmed) and the token, or the name unchanged when none is present.
#[must_use]
pub fn split_name_weight(name: &str) -> (&str, Option<&str>) {
    if let Some(caps) = NAME_WEIGHT_RE.captures(name) {
        if let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) {
            return (name[..whole.start()].trim_end(), Some(token.as_str()));
        }
    }
    (name, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // parse_price
    // -----------------------------------------------------------------------

    #[test]
    fn price_comma_separator() {
        assert_eq!(parse_price("1,70€"), Some(1.70));
    }

    #[test]
    fn price_dot_separator_with_spaced_euro() {
        assert_eq!(parse_price("1.70 €"), Some(1.70));
    }

    #[test]
    fn price_bare_number() {
        assert_eq!(parse_price("1.70"), Some(1.70));
    }

    #[test]
    fn price_latvian_from_prefix() {
        assert_eq!(parse_price("No 1.70 €"), Some(1.70));
    }

    #[test]
    fn price_english_from_prefix() {
        assert_eq!(parse_price("from 2,50€"), Some(2.50));
    }

    #[test]
    fn price_takes_first_decimal_match() {
        assert_eq!(parse_price("3,20€ / 5,10€"), Some(3.20));
    }

    #[test]
    fn price_no_number_returns_none() {
        assert_eq!(parse_price("free"), None);
    }

    #[test]
    fn price_integer_without_fraction_returns_none() {
        // The decimal pattern requires a separator; "2€" is not a match.
        assert_eq!(parse_price("2€"), None);
    }

    #[test]
    fn price_empty_returns_none() {
        assert_eq!(parse_price(""), None);
    }

    // -----------------------------------------------------------------------
    // parse_weight
    // -----------------------------------------------------------------------

    #[test]
    fn weight_grams_with_space() {
        assert_eq!(
            parse_weight("250 g"),
            Some(Weight::new(250.0, WeightUnit::Gram))
        );
    }

    #[test]
    fn weight_kilograms_decimal() {
        assert_eq!(
            parse_weight("1.5 kg"),
            Some(Weight::new(1.5, WeightUnit::Kilogram))
        );
    }

    #[test]
    fn weight_comma_decimal() {
        assert_eq!(
            parse_weight("0,5 kg"),
            Some(Weight::new(0.5, WeightUnit::Kilogram))
        );
    }

    #[test]
    fn weight_no_space_before_unit() {
        assert_eq!(
            parse_weight("100g"),
            Some(Weight::new(100.0, WeightUnit::Gram))
        );
    }

    #[test]
    fn weight_case_insensitive_unit() {
        assert_eq!(
            parse_weight("2 KG"),
            Some(Weight::new(2.0, WeightUnit::Kilogram))
        );
    }

    #[test]
    fn weight_label_with_embedded_price_still_parses() {
        assert_eq!(
            parse_weight("100 g (1.70€)"),
            Some(Weight::new(100.0, WeightUnit::Gram))
        );
    }

    #[test]
    fn weight_no_unit_returns_none() {
        assert_eq!(parse_weight("bulk"), None);
    }

    #[test]
    fn weight_bare_number_returns_none() {
        assert_eq!(parse_weight("250"), None);
    }

    // -----------------------------------------------------------------------
    // extract_embedded_price
    // -----------------------------------------------------------------------

    #[test]
    fn embedded_price_present() {
        assert_eq!(
            extract_embedded_price("100 g (1.70€)"),
            EmbeddedPrice::Price(1.70)
        );
    }

    #[test]
    fn embedded_price_comma_separator() {
        assert_eq!(
            extract_embedded_price("250 g (3,20€)"),
            EmbeddedPrice::Price(3.20)
        );
    }

    #[test]
    fn embedded_price_spaced_euro() {
        assert_eq!(
            extract_embedded_price("1 kg (12.50 € )"),
            EmbeddedPrice::Price(12.50)
        );
    }

    #[test]
    fn embedded_price_absent_for_plain_label() {
        assert_eq!(extract_embedded_price("250 g"), EmbeddedPrice::Absent);
    }

    #[test]
    fn embedded_price_absent_for_non_price_parenthetical() {
        // No euro sign means the parenthetical is not a price annotation.
        assert_eq!(
            extract_embedded_price("250 g (malta)"),
            EmbeddedPrice::Absent
        );
    }

    #[test]
    fn embedded_price_unparseable_amount() {
        assert_eq!(
            extract_embedded_price("250 g (cena€)"),
            EmbeddedPrice::Unparseable
        );
    }

    // -----------------------------------------------------------------------
    // split_name_weight
    // -----------------------------------------------------------------------

    #[test]
    fn name_with_trailing_weight() {
        assert_eq!(split_name_weight("Kanēlis 250g"), ("Kanēlis", Some("250g")));
    }

    #[test]
    fn name_with_interior_weight() {
        assert_eq!(
            split_name_weight("Kanēlis 250g malts"),
            ("Kanēlis", Some("250g"))
        );
    }

    #[test]
    fn name_with_kilogram_weight() {
        assert_eq!(split_name_weight("Sāls 1kg"), ("Sāls", Some("1kg")));
    }

    #[test]
    fn name_without_weight_unchanged() {
        assert_eq!(split_name_weight("Melnie pipari"), ("Melnie pipari", None));
    }

    #[test]
    fn name_with_bare_number_unchanged() {
        assert_eq!(split_name_weight("Maisījums Nr. 5"), ("Maisījums Nr. 5", None));
    }
}
