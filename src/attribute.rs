//! The closed attribute vocabulary facts and rules range over.
//!
//! Every query observes a color preference, a car brand, and a food
//! preference. Using enumerated types instead of a string-keyed map rules
//! out typo'd attribute names and out-of-domain condition values at compile
//! time; arbitrary user strings only enter through the case-insensitive
//! `FromStr` impls, where an unknown value is a parse error the caller can
//! turn into a non-match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The attributes a rule can condition on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Color preference.
    Color,
    /// Car brand preference.
    Car,
    /// Food preference.
    Food,
}

impl Attribute {
    /// Returns the attribute name as it appears in rendered rules.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Car => "car",
            Self::Food => "food",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Color preference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// The BLUE branch of the rule table.
    Blue,
    /// The GREEN branch of the rule table.
    Green,
}

/// Car brand preference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarBrand {
    /// KIA.
    Kia,
    /// FORD.
    Ford,
}

/// Food preference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodChoice {
    /// BURGER.
    Burger,
    /// PIZZA.
    Pizza,
}

impl Color {
    /// Returns the canonical uppercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Green => "GREEN",
        }
    }
}

impl CarBrand {
    /// Returns the canonical uppercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kia => "KIA",
            Self::Ford => "FORD",
        }
    }
}

impl FoodChoice {
    /// Returns the canonical uppercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Burger => "BURGER",
            Self::Pizza => "PIZZA",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CarBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FoodChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("BLUE") {
            Ok(Self::Blue)
        } else if trimmed.eq_ignore_ascii_case("GREEN") {
            Ok(Self::Green)
        } else {
            Err(ValidationError::UnrecognizedValue {
                attribute: Attribute::Color,
                value: s.to_string(),
            })
        }
    }
}

impl FromStr for CarBrand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("KIA") {
            Ok(Self::Kia)
        } else if trimmed.eq_ignore_ascii_case("FORD") {
            Ok(Self::Ford)
        } else {
            Err(ValidationError::UnrecognizedValue {
                attribute: Attribute::Car,
                value: s.to_string(),
            })
        }
    }
}

impl FromStr for FoodChoice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("BURGER") {
            Ok(Self::Burger)
        } else if trimmed.eq_ignore_ascii_case("PIZZA") {
            Ok(Self::Pizza)
        } else {
            Err(ValidationError::UnrecognizedValue {
                attribute: Attribute::Food,
                value: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_display() {
        assert_eq!(format!("{}", Attribute::Color), "color");
        assert_eq!(format!("{}", Attribute::Car), "car");
        assert_eq!(format!("{}", Attribute::Food), "food");
    }

    #[test]
    fn test_value_display_is_uppercase() {
        assert_eq!(format!("{}", Color::Blue), "BLUE");
        assert_eq!(format!("{}", CarBrand::Ford), "FORD");
        assert_eq!(format!("{}", FoodChoice::Pizza), "PIZZA");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("Green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("kia".parse::<CarBrand>().unwrap(), CarBrand::Kia);
        assert_eq!("FORD".parse::<CarBrand>().unwrap(), CarBrand::Ford);
        assert_eq!("Burger".parse::<FoodChoice>().unwrap(), FoodChoice::Burger);
        assert_eq!("pizza".parse::<FoodChoice>().unwrap(), FoodChoice::Pizza);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!("  blue ".parse::<Color>().unwrap(), Color::Blue);
    }

    #[test]
    fn test_parse_unknown_value() {
        let err = "RED".parse::<Color>().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnrecognizedValue {
                attribute: Attribute::Color,
                ..
            }
        ));
        assert!("TOYOTA".parse::<CarBrand>().is_err());
        assert!("SUSHI".parse::<FoodChoice>().is_err());
    }

    #[test]
    fn test_value_serialization() {
        let json = serde_json::to_string(&Color::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Blue);
    }
}
