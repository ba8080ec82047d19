//! Rules: condition sets paired with a GPA-range conclusion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, CarBrand, Color, FoodChoice};
use crate::error::ValidationError;
use crate::facts::FactSet;
use crate::range::GpaRange;

/// A single condition: one attribute must equal an expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "attribute", content = "value", rename_all = "snake_case")]
pub enum Condition {
    /// The observed color must equal this value.
    Color(Color),
    /// The observed car brand must equal this value.
    Car(CarBrand),
    /// The observed food preference must equal this value.
    Food(FoodChoice),
}

impl Condition {
    /// The attribute this condition inspects.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        match self {
            Self::Color(_) => Attribute::Color,
            Self::Car(_) => Attribute::Car,
            Self::Food(_) => Attribute::Food,
        }
    }

    /// Returns true iff the fact set holds this condition's expected value.
    ///
    /// An empty fact slot is a non-match, never a failure.
    #[must_use]
    pub fn is_satisfied_by(&self, facts: &FactSet) -> bool {
        match self {
            Self::Color(expected) => facts.color() == Some(*expected),
            Self::Car(expected) => facts.car() == Some(*expected),
            Self::Food(expected) => facts.food() == Some(*expected),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(v) => write!(f, "{}={v}", Attribute::Color),
            Self::Car(v) => write!(f, "{}={v}", Attribute::Car),
            Self::Food(v) => write!(f, "{}={v}", Attribute::Food),
        }
    }
}

/// A conjunction of conditions paired with a conclusion.
///
/// Rules are immutable after construction and the condition list is never
/// empty. The condition order only affects rendering, not matching.
///
/// # Examples
///
/// ```
/// use gpa_expert::{CarBrand, Color, Condition, FactSet, FoodChoice, GpaRange, Rule};
///
/// let rule = Rule::new(
///     vec![Condition::Color(Color::Blue), Condition::Car(CarBrand::Kia)],
///     GpaRange::below(2.5),
/// )?;
///
/// let facts = FactSet::observe(Color::Blue, CarBrand::Kia, FoodChoice::Pizza);
/// assert!(rule.matches(&facts)); // the food fact is simply ignored
/// # Ok::<(), gpa_expert::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    conditions: Vec<Condition>,
    conclusion: GpaRange,
}

impl Rule {
    /// Creates a rule from a condition list and a conclusion.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyConditions` if `conditions` is empty.
    /// Duplicate or mutually unsatisfiable conditions are accepted as-is.
    pub fn new(conditions: Vec<Condition>, conclusion: GpaRange) -> Result<Self, ValidationError> {
        if conditions.is_empty() {
            return Err(ValidationError::EmptyConditions);
        }
        Ok(Self {
            conditions,
            conclusion,
        })
    }

    /// Creates a rule conditioning on a full three-attribute profile.
    #[must_use]
    pub fn for_profile(
        color: Color,
        car: CarBrand,
        food: FoodChoice,
        conclusion: GpaRange,
    ) -> Self {
        Self {
            conditions: vec![
                Condition::Color(color),
                Condition::Car(car),
                Condition::Food(food),
            ],
            conclusion,
        }
    }

    /// Returns the conditions in rendering order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns the conclusion.
    #[must_use]
    pub const fn conclusion(&self) -> GpaRange {
        self.conclusion
    }

    /// Returns true iff every condition is satisfied by `facts`.
    ///
    /// Facts not referenced by any condition are ignored; comparison is
    /// exact equality over the enumerated domains.
    #[must_use]
    pub fn matches(&self, facts: &FactSet) -> bool {
        self.conditions.iter().all(|c| c.is_satisfied_by(facts))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{condition}")?;
        }
        write!(f, " THEN GPA={}", self.conclusion)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawRule {
            conditions: Vec<Condition>,
            conclusion: GpaRange,
        }

        let raw = RawRule::deserialize(deserializer)?;
        Rule::new(raw.conditions, raw.conclusion).map_err(serde::de::Error::custom)
    }
}
