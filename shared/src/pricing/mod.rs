//! Sale pricing reconciliation using rust_decimal for precision
//!
//! Keeps quantity, subtotal, tax and final amount mutually consistent under
//! the two entry modes of the sale form. All arithmetic is done in `Decimal`
//! and converted back to `f64` at the boundary; payload rounding to 2
//! decimal places happens only when a submission is assembled.

use rust_decimal::prelude::*;

use crate::models::fuel::FuelType;


/// Rounding for monetary values sent to the backend (2 decimal places, half-up)
const MONEY_PLACES: u32 = 2;

/// Rounding for dispensed quantities (gallons are metered finer than cents)
const QUANTITY_PLACES: u32 = 3;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// How the operator entered the sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    /// Quantity of fuel entered; tax is added on top of the net subtotal
    #[default]
    Gallons,
    /// Gross cash amount entered; tax and quantity are backed out of it
    Amount,
}

/// User-entered pricing state, rebuilt on every recomputation
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingInput {
    pub entry_mode: EntryMode,
    /// Gallons entered (Gallons mode)
    pub quantity: f64,
    /// Gross amount handed over by the customer (Amount mode)
    pub manual_amount: f64,
    /// Price per gallon, tax exclusive
    pub unit_price: f64,
    /// Flat discount applied before tax
    pub discount: f64,
    pub fuel: FuelType,
}

/// Derived pricing state; holds no identity beyond the current render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// Tax-exclusive subtotal
    pub subtotal: f64,
    pub tax_amount: f64,
    /// Rate applied, as a fraction
    pub tax_rate: f64,
    /// Amount the customer pays
    pub final_payable: f64,
    /// Gallons dispensed (entered or back-calculated)
    pub quantity: f64,
}

/// Clamp a user-entered f64 for calculation: non-finite and negative values
/// are treated as zero, never as errors. Invalid states surface later as a
/// zero quantity caught by submission validation.
#[inline]
fn sanitize(value: f64) -> Decimal {
    if !value.is_finite() {
        tracing::warn!(value = ?value, "Non-finite input in pricing, treating as zero");
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

/// Convert a Decimal back to f64 for display/state
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Round a monetary value for an outbound payload (2 decimal places, half-up)
pub fn round_money(value: f64) -> f64 {
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(MONEY_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Round a quantity for an outbound payload (3 decimal places, half-up)
pub fn round_quantity(value: f64) -> f64 {
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(QUANTITY_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Recompute all derived pricing fields from the current input.
///
/// Pure and stateless: switching entry modes re-derives everything from the
/// raw input, no half-computed state carries over. Never fails; guarded
/// divisions fall back to zero.
pub fn reconcile(input: &PricingInput) -> PricingResult {
    let rate = input.fuel.igv_rate();
    let unit_price = sanitize(input.unit_price);
    let discount = sanitize(input.discount);

    match input.entry_mode {
        EntryMode::Gallons => {
            let quantity = sanitize(input.quantity);
            let net = (quantity * unit_price - discount).max(Decimal::ZERO);
            let tax = net * rate;
            PricingResult {
                subtotal: to_f64(net),
                tax_amount: to_f64(tax),
                tax_rate: to_f64(rate),
                final_payable: to_f64(net + tax),
                quantity: to_f64(quantity),
            }
        }
        EntryMode::Amount => {
            let gross = (sanitize(input.manual_amount) - discount).max(Decimal::ZERO);
            // Tax is backed out of the gross, not added on top: the customer
            // pays a round cash amount and quantity follows from it.
            let net = if gross > Decimal::ZERO {
                gross / (Decimal::ONE + rate)
            } else {
                Decimal::ZERO
            };
            let tax = net * rate;
            let quantity = if unit_price > Decimal::ZERO {
                net / unit_price
            } else {
                Decimal::ZERO
            };
            PricingResult {
                subtotal: to_f64(net),
                tax_amount: to_f64(tax),
                tax_rate: to_f64(rate),
                final_payable: to_f64(gross),
                quantity: to_f64(quantity),
            }
        }
    }
}
