//! Points breakdown models.
//!
//! This module contains the [`PointsBreakdown`] type and the [`RuleStep`]
//! records that capture how each scoring rule contributed to a total.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single step in a points breakdown recording one rule's contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Points contributed by this rule, zero when it did not apply.
    pub points: u64,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

impl RuleStep {
    /// Returns true when the rule contributed at least one point.
    pub fn applied(&self) -> bool {
        self.points > 0
    }
}

/// The complete per-rule trace of one points calculation.
///
/// # Example
///
/// ```
/// use receipt_points::models::{PointsBreakdown, RuleStep};
///
/// let mut breakdown = PointsBreakdown::default();
/// breakdown
///     .push(RuleStep {
///         step_number: 1,
///         rule_id: "retailer_name".to_string(),
///         rule_name: "Retailer Name Density".to_string(),
///         points: 6,
///         reasoning: "6 alphanumeric characters in 'Target'".to_string(),
///     })
///     .unwrap();
/// assert_eq!(breakdown.total_points, 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// The rule steps in application order.
    pub steps: Vec<RuleStep>,
    /// Sum of all step points.
    pub total_points: u64,
}

impl PointsBreakdown {
    /// Appends a step and adds its points to the running total.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the total would exceed
    /// `u64::MAX`. The breakdown is left unchanged in that case.
    pub fn push(&mut self, step: RuleStep) -> EngineResult<()> {
        self.total_points = self
            .total_points
            .checked_add(step.points)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "points total overflows after step {} ({})",
                    step.step_number, step.rule_id
                ),
            })?;
        self.steps.push(step);
        Ok(())
    }

    /// Returns the step recorded for a rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&RuleStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}
