use crate::ingredient::Ingredient;

/// Ingredientes elegidos por el jugador, en el orden en que los eligio
pub struct PreparationBuffer {
    ingredients: Vec<Ingredient>,
}

impl PreparationBuffer {
    pub fn new() -> PreparationBuffer {
        PreparationBuffer {
            ingredients: Vec::new(),
        }
    }

    pub fn add(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn clear(&mut self) {
        self.ingredients.clear();
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_the_picking_order() {
        let mut buffer = PreparationBuffer::new();
        buffer.add(Ingredient::Salmon);
        buffer.add(Ingredient::Rice);
        assert_eq!(&[Ingredient::Salmon, Ingredient::Rice], buffer.ingredients());
    }

    #[test]
    fn should_accept_repeated_ingredients() {
        let mut buffer = PreparationBuffer::new();
        buffer.add(Ingredient::Rice);
        buffer.add(Ingredient::Rice);
        assert_eq!(2, buffer.ingredients().len());
    }

    #[test]
    fn should_clear_unconditionally() {
        let mut buffer = PreparationBuffer::new();
        buffer.clear();
        buffer.add(Ingredient::Nori);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
