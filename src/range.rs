//! GPA range conclusions.
//!
//! Every rule in the table concludes with an open interval over GPA values.
//! The three label shapes the table uses (`GPA < u`, `l < GPA < u`,
//! `l < GPA`) are all covered by a pair of optional exclusive bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A GPA range (open interval, optional bounds).
///
/// # Examples
///
/// ```
/// use gpa_expert::GpaRange;
///
/// let range = GpaRange::between(3.4, 4.1);
/// assert_eq!(range.to_string(), "3.4 < GPA < 4.1");
/// assert!(range.contains(3.8));
/// assert!(!range.contains(3.4)); // bounds are exclusive
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpaRange {
    /// Lower bound (exclusive). None means unbounded below.
    #[serde(skip_serializing_if = "Option::is_none")]
    lower: Option<f64>,

    /// Upper bound (exclusive). None means unbounded above.
    #[serde(skip_serializing_if = "Option::is_none")]
    upper: Option<f64>,
}

impl GpaRange {
    /// Creates a range from optional bounds.
    ///
    /// # Errors
    ///
    /// - `ValidationError::UnboundedGpaRange` if both bounds are `None`.
    /// - `ValidationError::InvalidGpaRange` if `lower >= upper`.
    pub fn from_bounds(lower: Option<f64>, upper: Option<f64>) -> Result<Self, ValidationError> {
        match (lower, upper) {
            (None, None) => Err(ValidationError::UnboundedGpaRange),
            (Some(l), Some(u)) if l >= u => {
                Err(ValidationError::InvalidGpaRange { lower: l, upper: u })
            }
            _ => Ok(Self { lower, upper }),
        }
    }

    /// Creates a range bounded only above: `GPA < upper`.
    #[must_use]
    pub const fn below(upper: f64) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// Creates a range bounded only below: `lower < GPA`.
    #[must_use]
    pub const fn above(lower: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// Creates a range bounded on both sides: `lower < GPA < upper`.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper`.
    #[must_use]
    pub fn between(lower: f64, upper: f64) -> Self {
        assert!(lower < upper, "lower bound must be below upper bound");
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Returns the lower bound, if any.
    #[must_use]
    pub const fn lower(&self) -> Option<f64> {
        self.lower
    }

    /// Returns the upper bound, if any.
    #[must_use]
    pub const fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// Check if a GPA value falls strictly inside this range.
    #[must_use]
    pub fn contains(&self, gpa: f64) -> bool {
        self.lower.map_or(true, |l| gpa > l) && self.upper.map_or(true, |u| gpa < u)
    }
}

impl fmt::Display for GpaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (None, Some(u)) => write!(f, "GPA < {u}"),
            (Some(l), None) => write!(f, "{l} < GPA"),
            (Some(l), Some(u)) => write!(f, "{l} < GPA < {u}"),
            // Unreachable through the public constructors.
            (None, None) => write!(f, "GPA"),
        }
    }
}

impl<'de> Deserialize<'de> for GpaRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawGpaRange {
            #[serde(default)]
            lower: Option<f64>,
            #[serde(default)]
            upper: Option<f64>,
        }

        let raw = RawGpaRange::deserialize(deserializer)?;
        GpaRange::from_bounds(raw.lower, raw.upper).map_err(serde::de::Error::custom)
    }
}
