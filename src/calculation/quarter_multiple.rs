//! Quarter multiple rule.
//!
//! Awards a bonus when the receipt total divides evenly by 0.25. The check
//! uses exact decimal remainder so values like `0.10` never pass through a
//! binary floating point representation.

use rust_decimal::Decimal;

use crate::models::RuleStep;

/// Rule identifier used in breakdown steps.
pub const QUARTER_MULTIPLE_RULE_ID: &str = "quarter_multiple";

/// Points awarded for a total that is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// The quarter step, 0.25.
pub fn quarter() -> Decimal {
    Decimal::new(25, 2)
}

/// Scores a total that is an exact multiple of 0.25.
///
/// # Examples
///
/// ```
/// use receipt_points::calculation::quarter_multiple_points;
/// use rust_decimal::Decimal;
///
/// assert_eq!(quarter_multiple_points(Decimal::new(125, 2), 3).points, 25);
/// assert_eq!(quarter_multiple_points(Decimal::new(265, 2), 3).points, 0);
/// ```
pub fn quarter_multiple_points(total: Decimal, step_number: u32) -> RuleStep {
    let remainder = total % quarter();

    let (points, reasoning) = if remainder.is_zero() {
        (
            QUARTER_MULTIPLE_POINTS,
            format!("Total ${} is a multiple of $0.25", total),
        )
    } else {
        (
            0,
            format!(
                "Total ${} leaves ${} after dividing by $0.25",
                total, remainder
            ),
        )
    };

    RuleStep {
        step_number,
        rule_id: QUARTER_MULTIPLE_RULE_ID.to_string(),
        rule_name: "Quarter Multiple Total".to_string(),
        points,
        reasoning,
    }
}
