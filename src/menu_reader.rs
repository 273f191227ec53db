use log::{debug, info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::GameError;
use crate::ingredient::Ingredient;
use crate::recipe::{Catalog, Recipe};

#[derive(Deserialize, Debug)]
struct JsonRecipe {
    name: String,
    ingredients: Vec<Ingredient>,
    visual: String,
}

#[derive(Deserialize)]
struct MenuConfiguration {
    recipes: Vec<JsonRecipe>,
}

fn read_menu_from_file<P: AsRef<Path>>(path: P) -> Result<MenuConfiguration, GameError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let menu: MenuConfiguration = serde_json::from_reader(reader)?;
    Ok(menu)
}

fn build_catalog(json_recipes: Vec<JsonRecipe>) -> Result<Catalog, GameError> {
    let recipes = json_recipes
        .into_iter()
        .map(|recipe| {
            debug!("[MENU] Read {}", recipe.name);
            Recipe::known(recipe.name, recipe.ingredients, recipe.visual)
        })
        .collect();
    Catalog::new(recipes)
}

pub fn read_menu<P: AsRef<Path>>(path: P) -> Result<Catalog, GameError> {
    let catalog = build_catalog(read_menu_from_file(path)?.recipes)?;
    info!("[MENU] Loaded {} recipes", catalog.len());
    Ok(catalog)
}

/// Carga el menu de `path`, o el menu de la casa cuando no hay o esta roto
pub fn read_menu_or_default<P: AsRef<Path>>(path: Option<P>) -> Catalog {
    match path {
        Some(path) => read_menu(path).unwrap_or_else(|error| {
            warn!("[MENU] {}, using the house menu", error);
            Catalog::default()
        }),
        None => Catalog::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::DisplayableRecipe;

    fn parse_menu(json: &str) -> Result<Catalog, GameError> {
        let menu: MenuConfiguration = serde_json::from_str(json)?;
        build_catalog(menu.recipes)
    }

    #[test]
    fn should_read_a_menu() {
        let catalog = parse_menu(
            r#"{"recipes": [{"name": "Tekka Maki", "ingredients": ["rice", "nori", "tuna"], "visual": "🐟📗"}]}"#,
        )
        .unwrap();
        assert_eq!(1, catalog.len());
        assert_eq!("Tekka Maki", catalog.recipes()[0].name());
        assert_eq!(
            &[Ingredient::Rice, Ingredient::Nori, Ingredient::Tuna],
            catalog.recipes()[0].ingredients()
        );
    }

    #[test]
    fn should_reject_unknown_ingredients() {
        let result = parse_menu(
            r#"{"recipes": [{"name": "Eel", "ingredients": ["rice", "eel"], "visual": "🐍"}]}"#,
        );
        assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
    }

    #[test]
    fn should_reject_an_empty_menu() {
        assert!(parse_menu(r#"{"recipes": []}"#).is_err());
    }

    #[test]
    fn should_fall_back_to_the_house_menu_when_the_file_is_missing() {
        let catalog = read_menu_or_default(Some("this/menu/does/not/exist.json"));
        assert_eq!(Catalog::default().len(), catalog.len());
    }
}
