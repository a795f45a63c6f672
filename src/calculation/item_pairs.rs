//! Item pair bonus rule.

use crate::models::RuleStep;

/// Rule identifier used in breakdown steps.
pub const ITEM_PAIRS_RULE_ID: &str = "item_pairs";

/// Points awarded per complete pair of items.
pub const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Awards five points for every two items on the receipt.
pub fn item_pairs_points(item_count: usize, step_number: u32) -> RuleStep {
    let pairs = (item_count / 2) as u64;
    let points = pairs * POINTS_PER_ITEM_PAIR;

    RuleStep {
        step_number,
        rule_id: ITEM_PAIRS_RULE_ID.to_string(),
        rule_name: "Item Pair Bonus".to_string(),
        points,
        reasoning: format!(
            "{} item(s) make {} pair(s) x {} = {}",
            item_count, pairs, POINTS_PER_ITEM_PAIR, points
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_scores_zero() {
        assert_eq!(item_pairs_points(1, 4).points, 0);
    }

    #[test]
    fn test_odd_count_rounds_down() {
        assert_eq!(item_pairs_points(5, 4).points, 10);
    }

    #[test]
    fn test_even_count() {
        assert_eq!(item_pairs_points(2, 4).points, 5);
        assert_eq!(item_pairs_points(4, 4).points, 10);
    }

    #[test]
    fn test_reasoning_shows_pairs() {
        let step = item_pairs_points(5, 4);
        assert_eq!(step.reasoning, "5 item(s) make 2 pair(s) x 5 = 10");
    }
}
