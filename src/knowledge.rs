//! The knowledge base: an ordered collection of rules.

use serde::{Deserialize, Serialize};

use crate::facts::FactSet;
use crate::rule::Rule;

/// An ordered rule collection.
///
/// Insertion order is significant: it is the tie-break priority when more
/// than one rule matches a fact set. Rules are never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a knowledge base from an ordered rule list.
    #[must_use]
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Appends a rule.
    ///
    /// No deduplication and no validation of overlapping conditions; a rule
    /// shadowed by an earlier insertion will simply never win.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Returns every rule matching `facts`, in insertion order.
    ///
    /// Empty when nothing matches; never an error.
    #[must_use]
    pub fn matching_rules(&self, facts: &FactSet) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.matches(facts)).collect()
    }

    /// Returns all rules in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the knowledge base holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
