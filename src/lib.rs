//! # gpa-expert - A forward-chaining GPA expert system
//!
//! A small expert system that predicts a GPA range from three categorical
//! preferences (color, car brand, food). A fixed knowledge base of eight
//! rules is scanned in insertion order; the first matching rule wins and
//! its conclusion is returned, together with a one-line explanation on
//! request.
//!
//! ## Core concepts
//!
//! - **FactSet**: the observed attribute=value pairs for one query
//! - **Rule**: a conjunction of attribute conditions paired with a
//!   [`GpaRange`] conclusion
//! - **KnowledgeBase**: the ordered rule collection; insertion order is the
//!   tie-break priority
//! - **InferenceEngine**: stateless forward chaining with first-match-wins
//! - **ExpertSystem**: facade owning the fixed rule table and normalizing
//!   raw string input
//!
//! ## Usage
//!
//! ```
//! use gpa_expert::ExpertSystem;
//!
//! let system = ExpertSystem::new();
//!
//! assert_eq!(system.predict("GREEN", "FORD", "PIZZA"), "3.9 < GPA");
//! assert_eq!(
//!     system.explain_prediction("GREEN", "FORD", "PIZZA"),
//!     "Applied rule: IF color=GREEN AND car=FORD AND food=PIZZA THEN GPA=3.9 < GPA"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute;
pub mod engine;
pub mod error;
pub mod facts;
pub mod knowledge;
pub mod range;
pub mod rule;
pub mod system;

// Re-export primary types at crate root for convenience
pub use attribute::{Attribute, CarBrand, Color, FoodChoice};
pub use engine::{InferenceEngine, Prediction, NO_MATCH};
pub use error::ValidationError;
pub use facts::FactSet;
pub use knowledge::KnowledgeBase;
pub use range::GpaRange;
pub use rule::{Condition, Rule};
pub use system::ExpertSystem;

/// Predicts a GPA range with a freshly constructed [`ExpertSystem`].
///
/// One-shot convenience wrapper over [`ExpertSystem::predict`]; unknown
/// input yields the [`NO_MATCH`] sentinel, never an error.
///
/// # Examples
///
/// ```
/// assert_eq!(gpa_expert::predict_gpa("BLUE", "KIA", "BURGER"), "GPA < 2.5");
/// ```
#[must_use]
pub fn predict_gpa(color: &str, car: &str, food: &str) -> String {
    ExpertSystem::new().predict(color, car, food)
}
