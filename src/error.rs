//! Error types for the GPA expert system.
//!
//! All errors are strongly typed using thiserror. A failed rule match is
//! never an error; these variants only cover constructive invariants.

use thiserror::Error;

use crate::attribute::Attribute;

/// Validation errors that occur during input validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A rule was built with an empty condition list.
    #[error("Rule must have at least one condition")]
    EmptyConditions,

    /// A GPA range was built with inverted bounds.
    #[error("Invalid GPA range: lower ({lower}) must be below upper ({upper})")]
    InvalidGpaRange {
        /// The offending lower bound.
        lower: f64,
        /// The offending upper bound.
        upper: f64,
    },

    /// A GPA range was built with no bounds at all.
    #[error("GPA range must have at least one bound")]
    UnboundedGpaRange,

    /// A raw value does not belong to an attribute's domain.
    #[error("Unrecognized {attribute} value: '{value}'")]
    UnrecognizedValue {
        /// The attribute being parsed.
        attribute: Attribute,
        /// The raw input that failed to parse.
        value: String,
    },
}
