//! Canonical display formatting for prices and price-per-kg.
//!
//! All output fields on a [`garsa_core::ProductRecord`] use the same
//! convention: integer euros, a dot, two zero-padded cent digits, or the
//! `"N/A"` sentinel when no usable value exists.

use garsa_core::{Weight, NOT_AVAILABLE};

/// Which suffix convention a call site wants for price-per-kg strings.
///
/// Both appear across the site integrations: column values are bare
/// (`"17.00"`), log lines and single-product views append the unit
/// (`"17.00 €/kg"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerKgStyle {
    Bare,
    Suffixed,
}

/// Formats a euro amount as `"<euros>.<two-digit-cents>"`.
///
/// A value of exactly `0.0` formats as `"N/A"`: a real product never costs
/// exactly zero, so zero encodes "price unknown". The collision between a
/// genuine free item and a missing price is a documented, accepted ambiguity
/// inherited from the source data pipeline — do not resolve it here without
/// a product decision.
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)] // exact-zero sentinel by contract
pub fn format_price(value: f64) -> String {
    if value == 0.0 {
        return NOT_AVAILABLE.to_owned();
    }
    let euros = value.trunc() as i64;
    let cents = ((value - value.trunc()) * 100.0).round() as i64;
    format!("{euros}.{cents:02}")
}

/// Price per kilogram, or `None` when the weight is zero (division guard).
#[must_use]
pub fn price_per_kg(price: f64, weight: &Weight) -> Option<f64> {
    let kilograms = weight.kilograms();
    if kilograms > 0.0 {
        Some(price / kilograms)
    } else {
        None
    }
}

/// Formats the price-per-kg for a record.
///
/// An unparseable weight (`None`) and a zero weight both yield `"N/A"`;
/// otherwise the [`format_price`] convention applies, with a ` €/kg` suffix
/// in [`PerKgStyle::Suffixed`].
#[must_use]
pub fn format_price_per_kg(price: f64, weight: Option<&Weight>, style: PerKgStyle) -> String {
    let Some(value) = weight.and_then(|w| price_per_kg(price, w)) else {
        return NOT_AVAILABLE.to_owned();
    };
    let formatted = format_price(value);
    if formatted == NOT_AVAILABLE {
        return formatted;
    }
    match style {
        PerKgStyle::Bare => formatted,
        PerKgStyle::Suffixed => format!("{formatted} €/kg"),
    }
}
