//! AnimalChoice - Pet species types

use serde::{Deserialize, Serialize};

/// Pet species an employee can adopt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimalChoice {
    Cat,
    Dog,
    Bird,
    Rabbit,
    Hamster,
    Fish,
}

impl std::fmt::Display for AnimalChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimalChoice::Cat => write!(f, "cat"),
            AnimalChoice::Dog => write!(f, "dog"),
            AnimalChoice::Bird => write!(f, "bird"),
            AnimalChoice::Rabbit => write!(f, "rabbit"),
            AnimalChoice::Hamster => write!(f, "hamster"),
            AnimalChoice::Fish => write!(f, "fish"),
        }
    }
}

impl std::str::FromStr for AnimalChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cat" => Ok(AnimalChoice::Cat),
            "dog" => Ok(AnimalChoice::Dog),
            "bird" => Ok(AnimalChoice::Bird),
            "rabbit" => Ok(AnimalChoice::Rabbit),
            "hamster" => Ok(AnimalChoice::Hamster),
            "fish" => Ok(AnimalChoice::Fish),
            _ => Err(format!("Unknown animal choice: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(AnimalChoice::from_str("Cat").unwrap(), AnimalChoice::Cat);
        assert_eq!(AnimalChoice::from_str("FISH").unwrap(), AnimalChoice::Fish);
    }

    #[test]
    fn test_parse_rejects_unknown_species() {
        assert!(AnimalChoice::from_str("dragon").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let choice = AnimalChoice::Hamster;
        assert_eq!(AnimalChoice::from_str(&choice.to_string()).unwrap(), choice);
    }
}
