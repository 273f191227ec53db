//! Platos que la cocina sabe preparar, mas el comodin para cualquier otra cosa
use std::collections::HashSet;

use crate::{
    errors::GameError,
    ingredient::{tokens, Ingredient},
};

pub const UNKNOWN_DISH_NAME: &str = "Unknown Dish";
const UNKNOWN_DISH_MARKER: &str = "❓";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipe {
    Known {
        name: String,
        ingredients: Vec<Ingredient>,
        visual: String,
    },
    /// Lo que sale de una preparacion que no coincide con nada del menu.
    /// Se puede encolar y entregar pero nunca satisface a nadie.
    Unknown { ingredients: Vec<Ingredient>, visual: String },
}

/// Todo lo que se puede mostrar en el mostrador o en el asiento de un cliente
pub trait DisplayableRecipe {
    fn name(&self) -> &str;
    fn ingredients(&self) -> &[Ingredient];
    fn visual(&self) -> &str;

    /// Visual que se usa en pantalla. Los platos conocidos con arroz se sirven sobre un token de arroz.
    fn display_visual(&self) -> String {
        self.visual().to_string()
    }
}

impl Recipe {
    pub fn known(name: impl Into<String>, ingredients: Vec<Ingredient>, visual: impl Into<String>) -> Recipe {
        Recipe::Known {
            name: name.into(),
            ingredients,
            visual: visual.into(),
        }
    }

    pub fn unknown(ingredients: Vec<Ingredient>) -> Recipe {
        let visual = format!("{}{}", UNKNOWN_DISH_MARKER, tokens(&ingredients));
        Recipe::Unknown { ingredients, visual }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Recipe::Known { .. })
    }
}

impl DisplayableRecipe for Recipe {
    fn name(&self) -> &str {
        match self {
            Recipe::Known { name, .. } => name.as_str(),
            Recipe::Unknown { .. } => UNKNOWN_DISH_NAME,
        }
    }

    fn ingredients(&self) -> &[Ingredient] {
        match self {
            Recipe::Known { ingredients, .. } | Recipe::Unknown { ingredients, .. } => ingredients,
        }
    }

    fn visual(&self) -> &str {
        match self {
            Recipe::Known { visual, .. } | Recipe::Unknown { visual, .. } => visual,
        }
    }

    fn display_visual(&self) -> String {
        match self {
            Recipe::Known { ingredients, visual, .. } => {
                let rice = Ingredient::Rice.token();
                if ingredients.contains(&Ingredient::Rice) && !visual.starts_with(rice) {
                    format!("{} {}", rice, visual)
                } else {
                    visual.clone()
                }
            }
            Recipe::Unknown { visual, .. } => visual.clone(),
        }
    }
}

/// Menu del restaurante. Queda fijo una vez que arranca la sesion.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Arma un catalogo, rechazando menus vacios, recetas sin nombre o sin ingredientes y nombres repetidos
    pub fn new(recipes: Vec<Recipe>) -> Result<Catalog, GameError> {
        if recipes.is_empty() {
            return Err(GameError::InvalidConfiguration("the menu has no recipes".to_string()));
        }
        let mut names = HashSet::new();
        for recipe in &recipes {
            if !recipe.is_known() {
                return Err(GameError::InvalidConfiguration(
                    "the menu can only hold known recipes".to_string(),
                ));
            }
            if recipe.name().trim().is_empty() || recipe.ingredients().is_empty() {
                return Err(GameError::InvalidConfiguration(format!(
                    "recipe '{}' needs a name and at least one ingredient",
                    recipe.name()
                )));
            }
            if !names.insert(recipe.name().to_string()) {
                return Err(GameError::InvalidConfiguration(format!(
                    "recipe '{}' is repeated",
                    recipe.name()
                )));
            }
        }
        Ok(Catalog { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        use Ingredient::*;
        Catalog {
            recipes: vec![
                Recipe::known("Salmon Nigiri", vec![Rice, Salmon], "🍣"),
                Recipe::known("Tuna Nigiri", vec![Rice, Tuna], "🐟"),
                Recipe::known("Cucumber Roll", vec![Rice, Nori, Cucumber], "🥒📗"),
                Recipe::known("Avocado Roll", vec![Rice, Nori, Avocado], "🥑📗"),
                Recipe::known(
                    "California Roll",
                    vec![Rice, Nori, Crab, Avocado, Cucumber],
                    "🦀🥑🥒📗",
                ),
            ],
        }
    }
}
