//! The expert system facade: fixed rule table plus normalized operations.

use std::sync::Arc;

use crate::attribute::{CarBrand, Color, FoodChoice};
use crate::engine::{InferenceEngine, Prediction};
use crate::facts::FactSet;
use crate::knowledge::KnowledgeBase;
use crate::range::GpaRange;
use crate::rule::Rule;

/// The GPA expert system.
///
/// Owns a knowledge base pre-populated with the fixed eight-rule table and
/// a forward-chaining engine, and exposes string-level operations that
/// normalize raw input (trim, case-insensitive) before matching.
///
/// Nothing mutates after construction, so a single instance can serve
/// concurrent queries.
///
/// # Examples
///
/// ```
/// use gpa_expert::ExpertSystem;
///
/// let system = ExpertSystem::new();
/// assert_eq!(system.predict("GREEN", "FORD", "PIZZA"), "3.9 < GPA");
/// assert_eq!(system.predict("RED", "KIA", "BURGER"), "No matching rule found");
/// ```
#[derive(Debug, Clone)]
pub struct ExpertSystem {
    knowledge: Arc<KnowledgeBase>,
    engine: InferenceEngine,
}

impl ExpertSystem {
    /// Builds the system with the fixed rule table.
    ///
    /// The eight rules cover the full cross-product of
    /// {BLUE, GREEN} x {KIA, FORD} x {BURGER, PIZZA}, each combination
    /// exactly once, so valid input never hits an ambiguous match.
    #[must_use]
    pub fn new() -> Self {
        let knowledge = Arc::new(KnowledgeBase::with_rules(Self::default_rules()));
        let engine = InferenceEngine::new(Arc::clone(&knowledge));
        Self { knowledge, engine }
    }

    // Rule table derived from the decision tree, blue branch first.
    fn default_rules() -> Vec<Rule> {
        use CarBrand::{Ford, Kia};
        use Color::{Blue, Green};
        use FoodChoice::{Burger, Pizza};

        vec![
            Rule::for_profile(Blue, Kia, Burger, GpaRange::below(2.5)),
            Rule::for_profile(Blue, Kia, Pizza, GpaRange::between(2.4, 3.1)),
            Rule::for_profile(Blue, Ford, Burger, GpaRange::between(2.7, 2.9)),
            Rule::for_profile(Blue, Ford, Pizza, GpaRange::between(3.4, 4.1)),
            Rule::for_profile(Green, Kia, Burger, GpaRange::between(3.1, 3.8)),
            Rule::for_profile(Green, Kia, Pizza, GpaRange::between(2.3, 3.9)),
            Rule::for_profile(Green, Ford, Burger, GpaRange::between(3.7, 4.2)),
            Rule::for_profile(Green, Ford, Pizza, GpaRange::above(3.9)),
        ]
    }

    /// Predicts a GPA range from raw input.
    ///
    /// Input is normalized (trimmed, matched case-insensitively); anything
    /// outside the attribute domains yields the no-match sentinel rather
    /// than an error.
    #[must_use]
    pub fn predict(&self, color: &str, car: &str, food: &str) -> String {
        self.infer(color, car, food).to_string()
    }

    /// Typed variant of [`predict`](Self::predict).
    #[must_use]
    pub fn infer(&self, color: &str, car: &str, food: &str) -> Prediction {
        self.engine
            .forward_chain(&FactSet::from_input(color, car, food))
    }

    /// Explains how a prediction was made.
    #[must_use]
    pub fn explain_prediction(&self, color: &str, car: &str, food: &str) -> String {
        self.engine.explain(&FactSet::from_input(color, car, food))
    }

    /// Renders every rule in insertion order.
    #[must_use]
    pub fn list_all_rules(&self) -> Vec<String> {
        self.knowledge
            .rules()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Returns every rule matching `facts`, in insertion order.
    ///
    /// Diagnostic for callers that want to see matches first-match-wins
    /// would suppress.
    #[must_use]
    pub fn matching_rules(&self, facts: &FactSet) -> Vec<&Rule> {
        self.engine.matching_rules(facts)
    }

    /// Returns the underlying knowledge base.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

impl Default for ExpertSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_has_eight_rules() {
        let system = ExpertSystem::new();
        assert_eq!(system.knowledge().len(), 8);
    }

    #[test]
    fn test_every_profile_matches_exactly_one_rule() {
        let system = ExpertSystem::new();
        for color in [Color::Blue, Color::Green] {
            for car in [CarBrand::Kia, CarBrand::Ford] {
                for food in [FoodChoice::Burger, FoodChoice::Pizza] {
                    let facts = FactSet::observe(color, car, food);
                    assert_eq!(system.matching_rules(&facts).len(), 1);
                }
            }
        }
    }

    #[test]
    fn test_predict_known_profiles() {
        let system = ExpertSystem::new();
        assert_eq!(system.predict("BLUE", "KIA", "BURGER"), "GPA < 2.5");
        assert_eq!(system.predict("BLUE", "KIA", "PIZZA"), "2.4 < GPA < 3.1");
        assert_eq!(system.predict("GREEN", "FORD", "PIZZA"), "3.9 < GPA");
    }

    #[test]
    fn test_predict_normalizes_case() {
        let system = ExpertSystem::new();
        assert_eq!(
            system.predict("blue", "kia", "burger"),
            system.predict("BLUE", "KIA", "BURGER")
        );
    }

    #[test]
    fn test_predict_unknown_input_is_no_match() {
        let system = ExpertSystem::new();
        assert_eq!(system.predict("RED", "KIA", "BURGER"), "No matching rule found");
        assert!(system.infer("RED", "KIA", "BURGER").is_no_match());
    }

    #[test]
    fn test_explain_prediction() {
        let system = ExpertSystem::new();
        assert_eq!(
            system.explain_prediction("green", "ford", "pizza"),
            "Applied rule: IF color=GREEN AND car=FORD AND food=PIZZA THEN GPA=3.9 < GPA"
        );
    }

    #[test]
    fn test_list_all_rules_order_and_format() {
        let system = ExpertSystem::new();
        let listed = system.list_all_rules();
        assert_eq!(listed.len(), 8);
        assert_eq!(
            listed[0],
            "IF color=BLUE AND car=KIA AND food=BURGER THEN GPA=GPA < 2.5"
        );
        assert_eq!(
            listed[7],
            "IF color=GREEN AND car=FORD AND food=PIZZA THEN GPA=3.9 < GPA"
        );
    }
}
