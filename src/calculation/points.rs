//! Points calculation entry points.
//!
//! This module applies every scoring rule to a receipt in a fixed order and
//! collects the results into a [`PointsBreakdown`].

use crate::error::EngineResult;
use crate::models::{PointsBreakdown, Receipt};

use super::afternoon_window::afternoon_window_points;
use super::item_description::item_description_points;
use super::item_pairs::item_pairs_points;
use super::odd_day::odd_day_points;
use super::quarter_multiple::quarter_multiple_points;
use super::retailer_name::retailer_name_points;
use super::round_total::round_total_points;

/// Applies every rule and returns the per-rule breakdown.
///
/// Rules are applied in this order: retailer name density, round total,
/// quarter multiple, item pairs, description length, odd purchase day and
/// afternoon window. The order does not change the total.
///
/// # Errors
///
/// Returns `CalculationError` if the purchase date or time is well-formed
/// but does not name a real calendar day or clock time.
///
/// # Examples
///
/// ```
/// use receipt_points::calculation::calculate_breakdown;
/// use receipt_points::models::{Item, Receipt};
/// use rust_decimal::Decimal;
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-02".to_string(),
///     purchase_time: "13:13".to_string(),
///     items: vec![Item::new("Pepsi - 12-oz", Decimal::new(125, 2))],
///     total: Decimal::new(125, 2),
/// };
///
/// let breakdown = calculate_breakdown(&receipt).unwrap();
/// assert_eq!(breakdown.total_points, 31);
/// assert_eq!(breakdown.steps.len(), 7);
/// ```
pub fn calculate_breakdown(receipt: &Receipt) -> EngineResult<PointsBreakdown> {
    let mut breakdown = PointsBreakdown::default();

    breakdown.push(retailer_name_points(&receipt.retailer, 1))?;
    breakdown.push(round_total_points(receipt.total, 2))?;
    breakdown.push(quarter_multiple_points(receipt.total, 3))?;
    breakdown.push(item_pairs_points(receipt.item_count(), 4))?;
    breakdown.push(item_description_points(&receipt.items, 5)?)?;
    breakdown.push(odd_day_points(&receipt.purchase_date, 6)?)?;
    breakdown.push(afternoon_window_points(&receipt.purchase_time, 7)?)?;

    Ok(breakdown)
}

/// Computes the total points for a receipt.
///
/// This is the total of [`calculate_breakdown`] and fails under the same
/// conditions.
pub fn calculate_points(receipt: &Receipt) -> EngineResult<u64> {
    calculate_breakdown(receipt).map(|breakdown| breakdown.total_points)
}
