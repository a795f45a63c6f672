//! Round total rule.
//!
//! Awards a flat bonus when the receipt total has no cents.

use rust_decimal::Decimal;

use crate::models::RuleStep;

/// Rule identifier used in breakdown steps.
pub const ROUND_TOTAL_RULE_ID: &str = "round_total";

/// Points awarded for a whole-dollar total.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Scores a total that is a whole number of currency units.
///
/// The check is done on the exact decimal value, so `"9.00"` qualifies and
/// `"9.10"` does not.
///
/// # Examples
///
/// ```
/// use receipt_points::calculation::round_total_points;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_total_points(Decimal::new(900, 2), 2).points, 50);
/// assert_eq!(round_total_points(Decimal::new(910, 2), 2).points, 0);
/// ```
pub fn round_total_points(total: Decimal, step_number: u32) -> RuleStep {
    let is_round = total.fract().is_zero();

    let (points, reasoning) = if is_round {
        (
            ROUND_TOTAL_POINTS,
            format!("Total ${} has no cents", total),
        )
    } else {
        (0, format!("Total ${} has cents", total))
    };

    RuleStep {
        step_number,
        rule_id: ROUND_TOTAL_RULE_ID.to_string(),
        rule_name: "Round Dollar Total".to_string(),
        points,
        reasoning,
    }
}
