//! Request types for the receipt points API.
//!
//! This module defines the JSON request structure for
//! `POST /receipts/process` and its validation into a domain [`Receipt`].
//! Every field is optional at the serde level, and every value is wrapped in
//! a [`JsonField`] that keeps a wrongly typed value instead of failing the
//! whole body. A missing or mistyped field is then reported as a field-level
//! violation alongside any others, rather than stopping at the first one.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineError;
use crate::models::{FieldViolation, Item, Receipt};

/// Retailer names: word characters, whitespace, hyphen and ampersand.
pub const RETAILER_PATTERN: &str = r"^[\w\s\-&]+$";
/// Item descriptions: word characters, whitespace and hyphen.
pub const DESCRIPTION_PATTERN: &str = r"^[\w\s\-]+$";
/// Amounts: ASCII digits with exactly two fractional digits.
pub const AMOUNT_PATTERN: &str = r"^[0-9]+\.[0-9]{2}$";
/// Purchase dates: `YYYY-MM-DD`.
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
/// Purchase times: `HH:MM`.
pub const TIME_PATTERN: &str = r"^[0-9]{2}:[0-9]{2}$";

static RETAILER_RE: Lazy<Regex> = Lazy::new(|| compile(RETAILER_PATTERN));
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| compile(DESCRIPTION_PATTERN));
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| compile(AMOUNT_PATTERN));
static DATE_RE: Lazy<Regex> = Lazy::new(|| compile(DATE_PATTERN));
static TIME_RE: Lazy<Regex> = Lazy::new(|| compile(TIME_PATTERN));

fn compile(pattern: &str) -> Regex {
    // Patterns are constants; test_patterns_compile covers them.
    Regex::new(pattern).expect("validation pattern must compile")
}

/// A request value that either has the expected JSON type or is kept as-is.
///
/// # Example
///
/// ```
/// use receipt_points::api::JsonField;
///
/// let field: JsonField<String> = serde_json::from_str("1.25").unwrap();
/// assert!(field.valid().is_none());
///
/// let field: JsonField<String> = serde_json::from_str("\"1.25\"").unwrap();
/// assert_eq!(field.valid().map(String::as_str), Some("1.25"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonField<T> {
    /// The value had the expected type.
    Valid(T),
    /// The value had some other JSON type.
    Invalid(Value),
}

impl<T> JsonField<T> {
    /// Returns the typed value, if the JSON type was the expected one.
    pub fn valid(&self) -> Option<&T> {
        match self {
            JsonField::Valid(value) => Some(value),
            JsonField::Invalid(_) => None,
        }
    }
}

impl<T> From<T> for JsonField<T> {
    fn from(value: T) -> Self {
        JsonField::Valid(value)
    }
}

/// Request body for `POST /receipts/process`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    /// The retailer or store name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<JsonField<String>>,
    /// The purchase date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<JsonField<String>>,
    /// The purchase time, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<JsonField<String>>,
    /// The purchased items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<JsonField<Vec<JsonField<ItemRequest>>>>,
    /// The total amount paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<JsonField<String>>,
}

/// Item information in a receipt request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// The short product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<JsonField<String>>,
    /// The item price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<JsonField<String>>,
}

impl ItemRequest {
    /// Creates a fully populated item request.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: Some(JsonField::Valid(short_description.into())),
            price: Some(JsonField::Valid(price.into())),
        }
    }
}

/// Collects violations while a request is checked field by field.
#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    /// Checks that a field is present, is a string and matches a pattern.
    fn text<'a>(
        &mut self,
        field: &str,
        value: &'a Option<JsonField<String>>,
        re: &Regex,
        pattern: &str,
    ) -> Option<&'a str> {
        match value {
            None => {
                self.push(field, "field required");
                None
            }
            Some(JsonField::Invalid(_)) => {
                self.push(field, "must be a string");
                None
            }
            Some(JsonField::Valid(v)) if !re.is_match(v) => {
                self.push(field, format!("must match pattern {}", pattern));
                None
            }
            Some(JsonField::Valid(v)) => Some(v.as_str()),
        }
    }

    /// Checks an amount field and parses it as an exact decimal.
    fn amount(&mut self, field: &str, value: &Option<JsonField<String>>) -> Option<Decimal> {
        let text = self.text(field, value, &AMOUNT_RE, AMOUNT_PATTERN)?;
        match Decimal::from_str(text) {
            Ok(amount) => Some(amount),
            Err(_) => {
                self.push(field, "amount is out of range");
                None
            }
        }
    }
}

impl TryFrom<ReceiptRequest> for Receipt {
    type Error = EngineError;

    /// Validates every field and builds the domain receipt.
    ///
    /// All violations are collected before returning, so a client sees every
    /// problem with its payload at once.
    fn try_from(req: ReceiptRequest) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();

        let retailer = violations.text("retailer", &req.retailer, &RETAILER_RE, RETAILER_PATTERN);
        let purchase_date =
            violations.text("purchaseDate", &req.purchase_date, &DATE_RE, DATE_PATTERN);
        let purchase_time =
            violations.text("purchaseTime", &req.purchase_time, &TIME_RE, TIME_PATTERN);
        let total = violations.amount("total", &req.total);

        let mut items = Vec::new();
        match &req.items {
            None => violations.push("items", "field required"),
            Some(JsonField::Invalid(_)) => violations.push("items", "must be a list"),
            Some(JsonField::Valid(list)) if list.is_empty() => {
                violations.push("items", "must contain at least 1 item")
            }
            Some(JsonField::Valid(list)) => {
                for (index, entry) in list.iter().enumerate() {
                    let JsonField::Valid(item) = entry else {
                        violations.push(&format!("items[{}]", index), "must be an object");
                        continue;
                    };
                    let description = violations.text(
                        &format!("items[{}].shortDescription", index),
                        &item.short_description,
                        &DESCRIPTION_RE,
                        DESCRIPTION_PATTERN,
                    );
                    let price = violations.amount(&format!("items[{}].price", index), &item.price);
                    if let (Some(description), Some(price)) = (description, price) {
                        items.push(Item::new(description, price));
                    }
                }
            }
        }

        match (retailer, purchase_date, purchase_time, total) {
            (Some(retailer), Some(purchase_date), Some(purchase_time), Some(total))
                if violations.0.is_empty() =>
            {
                Ok(Receipt {
                    retailer: retailer.to_string(),
                    purchase_date: purchase_date.to_string(),
                    purchase_time: purchase_time.to_string(),
                    items,
                    total,
                })
            }
            _ => Err(EngineError::InvalidReceipt {
                violations: violations.0,
            }),
        }
    }
}
