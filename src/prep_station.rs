//! Acciones del jugador en la estacion de preparacion y en el mostrador
use log::{debug, info};

use crate::{
    collaborators::Severity,
    customer::CustomerId,
    dish_queue::{DishId, QueuedDish},
    errors::GameError,
    ingredient::Ingredient,
    order_matching::match_recipe,
    recipe::{DisplayableRecipe, Recipe},
    session::GameSession,
};

impl GameSession {
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.preparation.add(ingredient);
        debug!("[PREP] Added {}", ingredient);
        self.renderer.render_prep_buffer(self.preparation.ingredients());
    }

    pub fn add_ingredient_by_name(&mut self, name: &str) {
        match name.parse::<Ingredient>() {
            Ok(ingredient) => self.add_ingredient(ingredient),
            Err(error) => self.reject(error),
        }
    }

    pub fn clear_preparation(&mut self) {
        self.preparation.clear();
        self.renderer.render_prep_buffer(self.preparation.ingredients());
        self.renderer
            .show_message("Preparation ingredients cleared.", Severity::Neutral);
    }

    /// Convierte la preparacion actual en un plato del mostrador.
    /// Lo que no esta en el menu igual se encola, como Unknown Dish.
    pub fn finish_preparation(&mut self) {
        if let Err(error) = self.try_finish_preparation() {
            self.reject(error);
        }
    }

    pub fn discard_dish(&mut self, dish_id: DishId) {
        if let Err(error) = self.try_discard_dish(dish_id) {
            self.reject(error);
        }
    }

    fn try_finish_preparation(&mut self) -> Result<DishId, GameError> {
        if self.preparation.is_empty() {
            return Err(GameError::InvalidAction("Prepare something first!".to_string()));
        }

        let prepared = self.preparation.ingredients();
        let recipe = match match_recipe(&self.catalog, prepared) {
            Some(recipe) => recipe.clone(),
            None => {
                debug!("[PREP] {}: {:?}", GameError::NoMatch, prepared);
                Recipe::unknown(prepared.to_vec())
            }
        };
        let customer_id = self.entitled_customer(&recipe);
        let dish_id = self.next_dish_id();
        let dish = QueuedDish::new(dish_id, recipe, customer_id);

        let (message, severity) = match (dish.recipe.is_known(), customer_id) {
            (true, Some(customer_id)) => (
                format!(
                    "Dish for Customer {} added to queue!",
                    self.seat_of(customer_id).unwrap_or_default()
                ),
                Severity::Info,
            ),
            (true, None) => (
                format!("{} added to queue, but nobody is waiting for it.", dish.recipe.name()),
                Severity::Warning,
            ),
            (false, _) => (
                format!("{}. Added an {} to the queue.", GameError::NoMatch, dish.recipe.name()),
                Severity::Warning,
            ),
        };

        info!("[PREP] Queued dish {} ({})", dish_id, dish.recipe.name());
        self.dish_queue.push(dish);
        self.preparation.clear();
        self.statistics.dishes_queued += 1;
        self.renderer.render_prep_buffer(self.preparation.ingredients());
        self.renderer.render_dish_queue(&self.dish_queue);
        self.renderer.show_message(&message, severity);
        Ok(dish_id)
    }

    /// Primer cliente en espera que pidio `recipe` y todavia no tiene un plato en camino
    fn entitled_customer(&self, recipe: &Recipe) -> Option<CustomerId> {
        if !recipe.is_known() {
            return None;
        }
        let party = self.party.as_ref()?;
        party
            .waiting()
            .filter(|customer| customer.wants(recipe.name()))
            .map(|customer| customer.id)
            .find(|id| !self.dish_queue.has_dish_for(*id) && !self.deliveries.has_dish_for(*id))
    }

    fn seat_of(&self, customer_id: CustomerId) -> Option<usize> {
        self.party
            .as_ref()
            .and_then(|party| party.customer(customer_id))
            .map(|customer| customer.seat_number)
    }

    fn try_discard_dish(&mut self, dish_id: DishId) -> Result<(), GameError> {
        if self.deliveries.is_in_flight(dish_id) {
            return Err(GameError::InvalidAction(
                "Cannot discard a dish that is currently being delivered!".to_string(),
            ));
        }
        let dish = self
            .dish_queue
            .remove(dish_id)
            .ok_or_else(|| GameError::InvalidAction(format!("There is no dish {} on the counter.", dish_id)))?;

        let penalty = self.config.discard_penalty;
        self.penalize(penalty);
        self.statistics.dishes_discarded += 1;
        info!("[PREP] Discarded dish {} ({})", dish_id, dish.recipe.name());
        self.renderer.render_dish_queue(&self.dish_queue);
        self.renderer.show_message(
            &format!("Discarded {}. (-{} points)", dish.recipe.name(), penalty),
            Severity::Warning,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        collaborators::Severity,
        config::GameConfig,
        dish_queue::DishId,
        ingredient::Ingredient,
        recipe::DisplayableRecipe,
        test_support::{fixed_config, harness, Harness},
    };

    #[test]
    fn should_reject_finishing_an_empty_preparation() {
        let mut harness = Harness::seated(1);
        harness.session.finish_preparation();
        assert_eq!(true, harness.session.dish_queue().is_empty());
        assert_eq!(
            Some(&("Prepare something first!".to_string(), Severity::Warning)),
            harness.recording.borrow().last_message()
        );
    }

    #[test]
    fn should_clear_the_preparation() {
        let mut harness = Harness::seated(1);
        harness.session.add_ingredient(Ingredient::Rice);
        harness.session.add_ingredient(Ingredient::Rice);
        harness.session.clear_preparation();
        assert_eq!(true, harness.session.preparation().is_empty());
        assert_eq!(Some(&Vec::new()), harness.recording.borrow().prep_buffers.last());
    }

    #[test]
    fn should_add_ingredients_by_name() {
        let mut harness = Harness::seated(1);
        harness.session.add_ingredient_by_name("nori");
        harness.session.add_ingredient_by_name("wasabi");
        assert_eq!(&[Ingredient::Nori], harness.session.preparation().ingredients());
        assert_eq!(true, harness.recording.borrow().has_message("There is no wasabi"));
    }

    #[test]
    fn should_match_ingredients_in_any_order() {
        let mut harness = Harness::seated(1);
        let mut order = harness.order_of(1);
        order.reverse();
        harness.prepare(&order);
        let dish = harness.session.dish_queue().iter().next().unwrap();
        assert_eq!(Some(harness.customer_id(1)), dish.customer_id);
        assert_eq!(harness.customer(1).order.as_ref(), Some(&dish.recipe));
    }

    #[test]
    fn should_queue_a_second_identical_dish_unbound() {
        let mut harness = Harness::seated(1);
        harness.prepare_order_of(1);
        harness.prepare_order_of(1);
        let bindings: Vec<_> = harness
            .session
            .dish_queue()
            .iter()
            .map(|dish| dish.customer_id)
            .collect();
        assert_eq!(vec![Some(harness.customer_id(1)), None], bindings);
        assert_eq!(true, harness.recording.borrow().has_message("nobody is waiting for it"));
    }

    #[test]
    fn should_not_bind_while_the_customer_dish_is_in_flight() {
        let mut harness = Harness::seated(1);
        harness.prepare_order_of(1);
        harness.session.deliver_next();
        harness.prepare_order_of(1);
        let dish = harness.session.dish_queue().iter().next().unwrap();
        assert_eq!(None, dish.customer_id);
    }

    #[test]
    fn should_queue_unknown_dishes_with_their_ingredients() {
        let mut harness = harness(fixed_config(1));
        harness.session.start();
        harness.prepare(&[Ingredient::Salmon, Ingredient::Salmon]);
        let dish = harness.session.dish_queue().iter().next().unwrap();
        assert_eq!("Unknown Dish", dish.recipe.name());
        assert_eq!(&[Ingredient::Salmon, Ingredient::Salmon], dish.recipe.ingredients());
        assert_eq!(0, harness.session.score());
    }

    #[test]
    fn should_discard_a_queued_dish_with_a_penalty() {
        let mut harness = Harness::seated(1);
        harness.prepare_order_of(1);
        harness.session.deliver_next();
        harness.session.advance(3000);
        assert_eq!(10, harness.session.score());

        harness.prepare(&[Ingredient::Crab]);
        let dish_id = harness.queued_ids()[0];
        harness.session.discard_dish(dish_id);
        assert_eq!(true, harness.session.dish_queue().is_empty());
        assert_eq!(9, harness.session.score());
        assert_eq!(1, harness.session.statistics().dishes_discarded);
    }

    #[test]
    fn should_not_go_below_zero_when_discarding() {
        let mut harness = Harness::seated(1);
        harness.prepare(&[Ingredient::Crab]);
        let dish_id = harness.queued_ids()[0];
        harness.session.discard_dish(dish_id);
        assert_eq!(0, harness.session.score());
        assert_eq!(true, harness.recording.borrow().has_message("Discarded Unknown Dish. (-1 points)"));
    }

    #[test]
    fn should_report_the_configured_discard_penalty() {
        let config = GameConfig {
            discard_penalty: 3,
            ..fixed_config(1)
        };
        let mut harness = harness(config);
        harness.session.start();
        harness.session.advance(1500);
        harness.prepare(&[Ingredient::Crab]);
        let dish_id = harness.queued_ids()[0];
        harness.session.discard_dish(dish_id);
        assert_eq!(true, harness.recording.borrow().has_message("Discarded Unknown Dish. (-3 points)"));
    }

    #[test]
    fn should_reject_discarding_a_dish_in_flight() {
        let mut harness = Harness::seated(1);
        harness.prepare_order_of(1);
        let dish_id = harness.queued_ids()[0];
        harness.session.deliver_next();
        harness.session.discard_dish(dish_id);
        assert_eq!(true, harness.session.is_in_flight(dish_id));
        assert_eq!(
            true,
            harness
                .recording
                .borrow()
                .has_message("Cannot discard a dish that is currently being delivered!")
        );
        harness.session.advance(3000);
        assert_eq!(10, harness.session.score());
    }

    #[test]
    fn should_reject_discarding_an_unknown_dish_id() {
        let mut harness = Harness::seated(1);
        harness.session.discard_dish(DishId(404));
        assert_eq!(0, harness.session.score());
        assert_eq!(true, harness.recording.borrow().has_message("There is no dish 404"));
    }
}
