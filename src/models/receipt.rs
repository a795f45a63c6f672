//! Receipt model and related types.
//!
//! This module defines the validated [`Receipt`] and [`Item`] structs that
//! the rule engine scores. Instances are produced by the API layer after
//! format validation and are never modified afterwards.

use rust_decimal::Decimal;
use serde::Serialize;

/// A single purchased line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// The short description printed on the receipt.
    #[serde(rename = "shortDescription")]
    pub description: String,
    /// The item price, with exactly two fractional digits.
    pub price: Decimal,
}

impl Item {
    /// Creates an item from a description and an exact price.
    pub fn new(description: impl Into<String>, price: Decimal) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }

    /// Returns the description with leading and trailing whitespace removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use receipt_points::models::Item;
    /// use rust_decimal::Decimal;
    ///
    /// let item = Item::new("   Klarbrunn 12-PK 12 FL OZ  ", Decimal::new(1200, 2));
    /// assert_eq!(item.trimmed_description(), "Klarbrunn 12-PK 12 FL OZ");
    /// ```
    pub fn trimmed_description(&self) -> &str {
        self.description.trim()
    }
}

/// A validated purchase receipt.
///
/// The purchase date and time keep their validated text form (`YYYY-MM-DD`
/// and `HH:MM`). A value can be well-formed and still name an impossible
/// calendar day, which the rule engine reports as a calculation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// The retailer or store name.
    pub retailer: String,
    /// The purchase date in `YYYY-MM-DD` form.
    pub purchase_date: String,
    /// The purchase time in 24-hour `HH:MM` form.
    pub purchase_time: String,
    /// The purchased items, never empty.
    pub items: Vec<Item>,
    /// The total amount paid.
    pub total: Decimal,
}

impl Receipt {
    /// Returns the number of items on the receipt.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_trimmed_description_strips_both_ends() {
        let item = Item::new("  Emils Cheese Pizza\t", dec("12.25"));
        assert_eq!(item.trimmed_description(), "Emils Cheese Pizza");
    }

    #[test]
    fn test_trimmed_description_keeps_inner_spaces() {
        let item = Item::new("Pepsi - 12-oz", dec("1.25"));
        assert_eq!(item.trimmed_description(), "Pepsi - 12-oz");
    }

    #[test]
    fn test_item_count() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", dec("1.25")),
                Item::new("Dasani", dec("1.40")),
            ],
            total: dec("2.65"),
        };
        assert_eq!(receipt.item_count(), 2);
    }

    #[test]
    fn test_receipt_serializes_with_wire_names() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:13".to_string(),
            items: vec![Item::new("Pepsi - 12-oz", dec("1.25"))],
            total: dec("1.25"),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["purchaseDate"], "2022-01-02");
        assert_eq!(json["purchaseTime"], "13:13");
        assert_eq!(json["items"][0]["shortDescription"], "Pepsi - 12-oz");
        assert_eq!(json["total"], "1.25");
    }
}
