//! Afternoon purchase window rule.
//!
//! Awards a bonus for purchases whose hour falls in `[14, 16)`, that is from
//! 2:00pm up to but not including 4:00pm. Minutes are ignored, so `15:59`
//! qualifies and `16:00` does not.

use chrono::{NaiveTime, Timelike};

use crate::error::{EngineError, EngineResult};
use crate::models::RuleStep;

/// Rule identifier used in breakdown steps.
pub const AFTERNOON_WINDOW_RULE_ID: &str = "afternoon_window";

/// Points awarded for an afternoon purchase.
pub const AFTERNOON_WINDOW_POINTS: u64 = 10;

/// First hour of the window, inclusive.
pub const AFTERNOON_WINDOW_START_HOUR: u32 = 14;

/// Hour at which the window closes, exclusive.
pub const AFTERNOON_WINDOW_END_HOUR: u32 = 16;

/// Format of the purchase time.
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Parses an `HH:MM` purchase time.
///
/// # Errors
///
/// Returns `CalculationError` for times outside the 24-hour clock such as
/// `24:00` or `12:60`.
pub fn parse_purchase_time(purchase_time: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(purchase_time, PURCHASE_TIME_FORMAT).map_err(|e| {
        EngineError::CalculationError {
            message: format!("invalid purchase time '{}': {}", purchase_time, e),
        }
    })
}

/// Scores a purchase made during the afternoon window.
///
/// # Examples
///
/// ```
/// use receipt_points::calculation::afternoon_window_points;
///
/// assert_eq!(afternoon_window_points("14:33", 7).unwrap().points, 10);
/// assert_eq!(afternoon_window_points("16:00", 7).unwrap().points, 0);
/// ```
pub fn afternoon_window_points(purchase_time: &str, step_number: u32) -> EngineResult<RuleStep> {
    let time = parse_purchase_time(purchase_time)?;
    let hour = time.hour();
    let in_window = (AFTERNOON_WINDOW_START_HOUR..AFTERNOON_WINDOW_END_HOUR).contains(&hour);

    let (points, reasoning) = if in_window {
        (
            AFTERNOON_WINDOW_POINTS,
            format!("Hour {:02} is between 14:00 and 16:00", hour),
        )
    } else {
        (0, format!("Hour {:02} is outside 14:00-16:00", hour))
    };

    Ok(RuleStep {
        step_number,
        rule_id: AFTERNOON_WINDOW_RULE_ID.to_string(),
        rule_name: "Afternoon Purchase Window".to_string(),
        points,
        reasoning,
    })
}
