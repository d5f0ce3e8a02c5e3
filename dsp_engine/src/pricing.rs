//! Cart pricing.
//!
//! [`compute_totals`] is the single pricing rule behind both the order preview and checkout endpoints. It is a pure
//! function over the cart contents and has no error conditions: validation of the individual line items (quantity at
//! least 1, non-negative unit price) is the HTTP layer's job and is not repeated here.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::db_types::LineItem;

/// The derived cost breakdown for a cart. Computed on demand, never stored as such; checkout converts the rounded
/// figures to [`dsp_common::Money`] before persisting them on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Computes the cost breakdown for a cart.
///
/// * `subtotal` is the exact sum of `qty × unit_price` over all line items (an empty cart yields 0).
/// * `discount` is an absolute amount, not a percentage. It is deliberately not clamped to the subtotal.
/// * `tax = (subtotal − discount) × tax_rate`, i.e. tax applies to the post-discount amount. If the discount
///   overshoots the subtotal this is negative, and it stays negative in the output.
/// * `total = max(subtotal − discount + tax, 0)`. Only the total is clamped; it is never negative.
///
/// All four output fields are rounded to 2 decimal places as a final formatting step. Everything before that runs
/// at full [`Decimal`] precision.
pub fn compute_totals(items: &[LineItem], discount: Decimal, tax_rate: Decimal) -> CartTotals {
    let subtotal: Decimal = items.iter().map(|item| Decimal::from(item.qty) * item.unit_price).sum();
    let tax = (subtotal - discount) * tax_rate;
    let total = (subtotal - discount + tax).max(Decimal::ZERO);
    CartTotals {
        subtotal: round_currency(subtotal),
        discount: round_currency(discount),
        tax: round_currency(tax),
        total: round_currency(total),
    }
}

/// Currency-style rounding: 2 decimal places, midpoints away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
