//! Fact sets: the observed attribute values for a single query.

use serde::{Deserialize, Serialize};

use crate::attribute::{CarBrand, Color, FoodChoice};

/// The observations for one query, built fresh per call and discarded after.
///
/// Each attribute slot is optional. Raw input that does not belong to an
/// attribute's domain leaves the slot empty, and an empty slot never
/// satisfies a condition — a missing fact is a non-match, not a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    /// Observed color preference, if recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,

    /// Observed car brand, if recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    car: Option<CarBrand>,

    /// Observed food preference, if recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    food: Option<FoodChoice>,
}

impl FactSet {
    /// Creates an empty fact set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fully populated fact set from typed values.
    #[must_use]
    pub const fn observe(color: Color, car: CarBrand, food: FoodChoice) -> Self {
        Self {
            color: Some(color),
            car: Some(car),
            food: Some(food),
        }
    }

    /// Parses raw user input into a fact set.
    ///
    /// Values are trimmed and matched ASCII-case-insensitively against each
    /// attribute's domain. Unrecognized values leave the slot empty.
    #[must_use]
    pub fn from_input(color: &str, car: &str, food: &str) -> Self {
        Self {
            color: color.parse().ok(),
            car: car.parse().ok(),
            food: food.parse().ok(),
        }
    }

    /// Sets the color observation.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the car brand observation.
    #[must_use]
    pub const fn with_car(mut self, car: CarBrand) -> Self {
        self.car = Some(car);
        self
    }

    /// Sets the food observation.
    #[must_use]
    pub const fn with_food(mut self, food: FoodChoice) -> Self {
        self.food = Some(food);
        self
    }

    /// Returns the observed color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the observed car brand, if any.
    #[must_use]
    pub const fn car(&self) -> Option<CarBrand> {
        self.car
    }

    /// Returns the observed food preference, if any.
    #[must_use]
    pub const fn food(&self) -> Option<FoodChoice> {
        self.food
    }

    /// Returns true when every attribute slot is filled.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.color.is_some() && self.car.is_some() && self.food.is_some()
    }
}
