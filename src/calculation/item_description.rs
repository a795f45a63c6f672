//! Description-length bonus rule.
//!
//! This module scores items whose trimmed description length is a positive
//! multiple of three. Each qualifying item earns its price multiplied by 0.2,
//! rounded up to the next whole point.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{Item, RuleStep};

/// Rule identifier used in breakdown steps.
pub const ITEM_DESCRIPTION_RULE_ID: &str = "item_description";

/// Returns the price multiplier applied to qualifying items, 0.2.
pub fn description_price_multiplier() -> Decimal {
    Decimal::new(2, 1)
}

/// Returns the bonus for a single item, or zero when it does not qualify.
///
/// Length is counted in characters after trimming leading and trailing
/// whitespace. An item whose description trims to nothing never qualifies.
///
/// # Errors
///
/// Returns `CalculationError` if the rounded bonus does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use receipt_points::calculation::item_description_bonus;
/// use receipt_points::models::Item;
/// use rust_decimal::Decimal;
///
/// // "Emils Cheese Pizza" is 18 characters; 12.25 * 0.2 = 2.45, rounded up to 3
/// let item = Item::new("Emils Cheese Pizza", Decimal::new(1225, 2));
/// assert_eq!(item_description_bonus(&item).unwrap(), 3);
/// ```
pub fn item_description_bonus(item: &Item) -> EngineResult<u64> {
    if !is_length_multiple_of_three(item) {
        return Ok(0);
    }

    let bonus = (item.price * description_price_multiplier()).ceil();
    bonus.to_u64().ok_or_else(|| EngineError::CalculationError {
        message: format!(
            "description bonus {} for item '{}' is out of range",
            bonus,
            item.trimmed_description()
        ),
    })
}

/// Sums the description-length bonus across all items.
///
/// # Arguments
///
/// * `items` - The receipt items in submission order
/// * `step_number` - The step number for breakdown sequencing
///
/// # Returns
///
/// A [`RuleStep`] whose reasoning lists each qualifying item and its bonus.
pub fn item_description_points(items: &[Item], step_number: u32) -> EngineResult<RuleStep> {
    let mut points: u64 = 0;
    let mut qualifying = Vec::new();

    for item in items {
        let bonus = item_description_bonus(item)?;
        if is_length_multiple_of_three(item) {
            qualifying.push(format!(
                "'{}' (${} x {} -> {})",
                item.trimmed_description(),
                item.price,
                description_price_multiplier(),
                bonus
            ));
        }
        points = points
            .checked_add(bonus)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "description bonus total overflows at item '{}'",
                    item.trimmed_description()
                ),
            })?;
    }

    let reasoning = if qualifying.is_empty() {
        "No item description length is a multiple of 3".to_string()
    } else {
        format!("Qualifying items: {}", qualifying.join(", "))
    };

    Ok(RuleStep {
        step_number,
        rule_id: ITEM_DESCRIPTION_RULE_ID.to_string(),
        rule_name: "Description Length Multiple of Three".to_string(),
        points,
        reasoning,
    })
}

fn is_length_multiple_of_three(item: &Item) -> bool {
    let length = item.trimmed_description().chars().count();
    length > 0 && length % 3 == 0
}
