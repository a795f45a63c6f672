//! Core data models for the receipt points service.
//!
//! This module contains all the domain models used throughout the service.

mod points;
mod receipt;
mod violation;

pub use points::{PointsBreakdown, RuleStep};
pub use receipt::{Item, Receipt};
pub use violation::FieldViolation;
