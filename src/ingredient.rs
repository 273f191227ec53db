//! Ingredientes disponibles en la estacion de preparacion
use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::errors::GameError;

pub const TOTAL_INGREDIENTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Rice,
    Nori,
    Salmon,
    Tuna,
    Avocado,
    Cucumber,
    Crab,
}

pub static INGREDIENTS: [Ingredient; TOTAL_INGREDIENTS] = [
    Ingredient::Rice,
    Ingredient::Nori,
    Ingredient::Salmon,
    Ingredient::Tuna,
    Ingredient::Avocado,
    Ingredient::Cucumber,
    Ingredient::Crab,
];

impl Ingredient {
    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::Rice => "rice",
            Ingredient::Nori => "nori",
            Ingredient::Salmon => "salmon",
            Ingredient::Tuna => "tuna",
            Ingredient::Avocado => "avocado",
            Ingredient::Cucumber => "cucumber",
            Ingredient::Crab => "crab",
        }
    }

    /// Token que se muestra en pantalla para este ingrediente
    pub fn token(&self) -> &'static str {
        match self {
            Ingredient::Rice => "🍚",
            Ingredient::Nori => "📗",
            Ingredient::Salmon => "🍣",
            Ingredient::Tuna => "🐟",
            Ingredient::Avocado => "🥑",
            Ingredient::Cucumber => "🥒",
            Ingredient::Crab => "🦀",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ingredient {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        INGREDIENTS
            .iter()
            .find(|ingredient| ingredient.name() == wanted)
            .copied()
            .ok_or_else(|| GameError::InvalidAction(format!("There is no {} in the kitchen", s.trim())))
    }
}

/// Une los tokens de los ingredientes dados, en el orden dado
pub fn tokens(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|ingredient| ingredient.token())
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_ingredient_from_its_name() {
        for ingredient in INGREDIENTS.iter() {
            assert_eq!(Ok(*ingredient), ingredient.name().parse::<Ingredient>());
        }
    }

    #[test]
    fn should_parse_ignoring_case_and_spaces() {
        assert_eq!(Ok(Ingredient::Salmon), " Salmon ".parse::<Ingredient>());
    }

    #[test]
    fn should_reject_an_unknown_ingredient() {
        assert!("wasabi".parse::<Ingredient>().is_err());
    }

    #[test]
    fn should_join_tokens_in_order() {
        assert_eq!("🍚 🐟", tokens(&[Ingredient::Rice, Ingredient::Tuna]));
    }
}
