//! Indica a que plato del menu corresponde un conjunto de ingredientes preparados
use crate::{
    ingredient::Ingredient,
    recipe::{Catalog, DisplayableRecipe, Recipe},
};

fn canonical(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let mut sorted = ingredients.to_vec();
    sorted.sort();
    sorted
}

/// Devuelve la primera receta cuyos ingredientes son exactamente los preparados,
/// comparados como multiconjuntos
pub fn match_recipe<'a>(catalog: &'a Catalog, prepared: &[Ingredient]) -> Option<&'a Recipe> {
    let prepared = canonical(prepared);
    catalog
        .recipes()
        .iter()
        .find(|recipe| canonical(recipe.ingredients()) == prepared)
}
