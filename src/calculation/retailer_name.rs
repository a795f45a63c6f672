//! Retailer name density rule.
//!
//! Awards one point for every alphanumeric character in the retailer name.
//! Spaces, hyphens, ampersands and underscores contribute nothing.

use crate::models::RuleStep;

/// Rule identifier used in breakdown steps.
pub const RETAILER_NAME_RULE_ID: &str = "retailer_name";

/// Scores the retailer name.
///
/// # Arguments
///
/// * `retailer` - The retailer name from the receipt
/// * `step_number` - The step number for breakdown sequencing
///
/// # Examples
///
/// ```
/// use receipt_points::calculation::retailer_name_points;
///
/// let step = retailer_name_points("M&M Corner Market", 1);
/// assert_eq!(step.points, 14);
/// ```
pub fn retailer_name_points(retailer: &str, step_number: u32) -> RuleStep {
    let alphanumeric = retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64;

    RuleStep {
        step_number,
        rule_id: RETAILER_NAME_RULE_ID.to_string(),
        rule_name: "Retailer Name Density".to_string(),
        points: alphanumeric,
        reasoning: format!(
            "{} alphanumeric character(s) in '{}'",
            alphanumeric, retailer
        ),
    }
}
