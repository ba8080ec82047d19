//! Forward-chaining inference over a knowledge base.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::facts::FactSet;
use crate::knowledge::KnowledgeBase;
use crate::range::GpaRange;
use crate::rule::Rule;

/// Sentinel rendered when no rule matches the facts.
pub const NO_MATCH: &str = "No matching rule found";

const NO_MATCH_EXPLANATION: &str = "No matching rule found for the given facts";

/// Outcome of a forward-chaining pass.
///
/// A failed match is a normal outcome, not an error. Typed callers can
/// distinguish the two cases; `Display` renders either the conclusion label
/// or the [`NO_MATCH`] sentinel for string-level callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "conclusion", rename_all = "snake_case")]
pub enum Prediction {
    /// The winning rule's conclusion.
    Conclusion(GpaRange),
    /// No rule matched the facts.
    NoMatch,
}

impl Prediction {
    /// Returns the concluded range, if any.
    #[must_use]
    pub const fn conclusion(&self) -> Option<GpaRange> {
        match self {
            Self::Conclusion(range) => Some(*range),
            Self::NoMatch => None,
        }
    }

    /// Returns true if no rule matched.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conclusion(range) => write!(f, "{range}"),
            Self::NoMatch => write!(f, "{NO_MATCH}"),
        }
    }
}

/// Stateless forward-chaining engine.
///
/// Reads the knowledge base through a shared handle and never mutates it,
/// so one engine can serve concurrent queries without locking. Every call
/// is independent.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl InferenceEngine {
    /// Creates an engine reading from the given knowledge base.
    #[must_use]
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Infers a conclusion from the facts.
    ///
    /// The earliest-inserted matching rule wins; later matches are silently
    /// ignored. This is a deliberate policy, kept even though the shipped
    /// rule table has no overlaps.
    #[must_use]
    pub fn forward_chain(&self, facts: &FactSet) -> Prediction {
        match self.winning_rule(facts) {
            Some(rule) => Prediction::Conclusion(rule.conclusion()),
            None => Prediction::NoMatch,
        }
    }

    /// Explains the inference as a human-readable string.
    #[must_use]
    pub fn explain(&self, facts: &FactSet) -> String {
        match self.winning_rule(facts) {
            Some(rule) => format!("Applied rule: {rule}"),
            None => NO_MATCH_EXPLANATION.to_string(),
        }
    }

    /// Returns the rule `forward_chain` would apply, if any.
    #[must_use]
    pub fn winning_rule(&self, facts: &FactSet) -> Option<&Rule> {
        self.knowledge.rules().iter().find(|r| r.matches(facts))
    }

    /// Returns every matching rule in insertion order.
    ///
    /// First-match-wins hides later matches; this lets callers detect
    /// ambiguity explicitly should the rule table ever grow overlaps.
    #[must_use]
    pub fn matching_rules(&self, facts: &FactSet) -> Vec<&Rule> {
        self.knowledge.matching_rules(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{CarBrand, Color, FoodChoice};
    use crate::rule::Condition;

    fn engine_with(rules: Vec<Rule>) -> InferenceEngine {
        InferenceEngine::new(Arc::new(KnowledgeBase::with_rules(rules)))
    }

    #[test]
    fn test_forward_chain_returns_first_match() {
        // Two overlapping rules: insertion order must decide.
        let first = Rule::new(vec![Condition::Color(Color::Blue)], GpaRange::below(2.5)).unwrap();
        let second = Rule::new(vec![Condition::Color(Color::Blue)], GpaRange::above(3.9)).unwrap();
        let engine = engine_with(vec![first, second]);

        let facts = FactSet::new().with_color(Color::Blue);
        assert_eq!(
            engine.forward_chain(&facts),
            Prediction::Conclusion(GpaRange::below(2.5))
        );
        assert_eq!(engine.matching_rules(&facts).len(), 2);
    }

    #[test]
    fn test_forward_chain_no_match() {
        let rule = Rule::for_profile(
            Color::Blue,
            CarBrand::Kia,
            FoodChoice::Burger,
            GpaRange::below(2.5),
        );
        let engine = engine_with(vec![rule]);

        let facts = FactSet::observe(Color::Green, CarBrand::Ford, FoodChoice::Pizza);
        let prediction = engine.forward_chain(&facts);
        assert!(prediction.is_no_match());
        assert_eq!(prediction.conclusion(), None);
        assert_eq!(prediction.to_string(), NO_MATCH);
    }

    #[test]
    fn test_explain_renders_winning_rule() {
        let rule = Rule::for_profile(
            Color::Blue,
            CarBrand::Kia,
            FoodChoice::Burger,
            GpaRange::below(2.5),
        );
        let engine = engine_with(vec![rule]);

        let facts = FactSet::observe(Color::Blue, CarBrand::Kia, FoodChoice::Burger);
        assert_eq!(
            engine.explain(&facts),
            "Applied rule: IF color=BLUE AND car=KIA AND food=BURGER THEN GPA=GPA < 2.5"
        );
    }

    #[test]
    fn test_explain_no_match() {
        let engine = engine_with(Vec::new());
        let facts = FactSet::new();
        assert_eq!(
            engine.explain(&facts),
            "No matching rule found for the given facts"
        );
    }

    #[test]
    fn test_calls_are_stateless() {
        let rule = Rule::for_profile(
            Color::Blue,
            CarBrand::Kia,
            FoodChoice::Burger,
            GpaRange::below(2.5),
        );
        let engine = engine_with(vec![rule]);
        let facts = FactSet::observe(Color::Blue, CarBrand::Kia, FoodChoice::Burger);
        assert_eq!(engine.forward_chain(&facts), engine.forward_chain(&facts));
    }

    #[test]
    fn test_prediction_serialization() {
        let prediction = Prediction::Conclusion(GpaRange::above(3.9));
        let json = serde_json::to_string(&prediction).unwrap();
        let back: Prediction = serde_json::from_str(&json).unwrap();
        assert_eq!(prediction, back);

        let json = serde_json::to_string(&Prediction::NoMatch).unwrap();
        let back: Prediction = serde_json::from_str(&json).unwrap();
        assert!(back.is_no_match());
    }
}
