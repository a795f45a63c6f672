//! Odd purchase day rule.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::RuleStep;

/// Rule identifier used in breakdown steps.
pub const ODD_DAY_RULE_ID: &str = "odd_day";

/// Points awarded when the purchase day of month is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// Format of the purchase date.
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` purchase date into a calendar date.
///
/// # Errors
///
/// Returns `CalculationError` when the text names a day that does not
/// exist, such as `2022-02-30` or `2022-13-01`.
pub fn parse_purchase_date(purchase_date: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(purchase_date, PURCHASE_DATE_FORMAT).map_err(|e| {
        EngineError::CalculationError {
            message: format!("invalid purchase date '{}': {}", purchase_date, e),
        }
    })
}

/// Scores a purchase made on an odd day of the month.
///
/// # Examples
///
/// ```
/// use receipt_points::calculation::odd_day_points;
///
/// assert_eq!(odd_day_points("2022-01-01", 6).unwrap().points, 6);
/// assert_eq!(odd_day_points("2022-03-20", 6).unwrap().points, 0);
/// assert!(odd_day_points("2022-02-30", 6).is_err());
/// ```
pub fn odd_day_points(purchase_date: &str, step_number: u32) -> EngineResult<RuleStep> {
    let date = parse_purchase_date(purchase_date)?;
    let day = date.day();

    let (points, reasoning) = if day % 2 == 1 {
        (ODD_DAY_POINTS, format!("Day {} of {} is odd", day, date))
    } else {
        (0, format!("Day {} of {} is even", day, date))
    };

    Ok(RuleStep {
        step_number,
        rule_id: ODD_DAY_RULE_ID.to_string(),
        rule_name: "Odd Purchase Day".to_string(),
        points,
        reasoning,
    })
}
