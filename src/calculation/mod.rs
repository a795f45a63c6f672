//! Points calculation logic for the receipt points service.
//!
//! This module contains one function per scoring rule (retailer name density,
//! round dollar total, quarter multiple total, item pairs, description length,
//! odd purchase day and afternoon window) and the [`calculate_points`] entry
//! point that sums them.

mod afternoon_window;
mod item_description;
mod item_pairs;
mod odd_day;
mod points;
mod quarter_multiple;
mod retailer_name;
mod round_total;

pub use afternoon_window::{
    AFTERNOON_WINDOW_END_HOUR, AFTERNOON_WINDOW_POINTS, AFTERNOON_WINDOW_RULE_ID,
    AFTERNOON_WINDOW_START_HOUR, afternoon_window_points, parse_purchase_time,
};
pub use item_description::{
    ITEM_DESCRIPTION_RULE_ID, description_price_multiplier, item_description_bonus,
    item_description_points,
};
pub use item_pairs::{ITEM_PAIRS_RULE_ID, POINTS_PER_ITEM_PAIR, item_pairs_points};
pub use odd_day::{ODD_DAY_POINTS, ODD_DAY_RULE_ID, odd_day_points, parse_purchase_date};
pub use points::{calculate_breakdown, calculate_points};
pub use quarter_multiple::{
    QUARTER_MULTIPLE_POINTS, QUARTER_MULTIPLE_RULE_ID, quarter, quarter_multiple_points,
};
pub use retailer_name::{RETAILER_NAME_RULE_ID, retailer_name_points};
pub use round_total::{ROUND_TOTAL_POINTS, ROUND_TOTAL_RULE_ID, round_total_points};
