//! Traslado de los platos del mostrador a la mesa.
//!
//! Un plato sale de la cola y entra al tracker en el mismo paso, antes de que empiece
//! su animacion. Se resuelve una sola vez, por la señal de la animacion o por el
//! timer de respaldo, lo que llegue primero.
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::{
    collaborators::{AnimationOutcome, Severity},
    customer::CustomerId,
    dish_queue::{DishId, QueuedDish},
    errors::GameError,
    recipe::{DisplayableRecipe, UNKNOWN_DISH_NAME},
    session::{GameEvent, GameSession},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    InFlight,
    Resolved,
}

struct Delivery {
    dish: QueuedDish,
    state: DeliveryState,
}

/// Platos que salieron del mostrador y todavia no se liberaron
pub struct DeliveryTracker {
    deliveries: HashMap<DishId, Delivery>,
}

impl DeliveryTracker {
    pub fn new() -> DeliveryTracker {
        DeliveryTracker {
            deliveries: HashMap::new(),
        }
    }

    pub fn launch(&mut self, dish: QueuedDish) {
        self.deliveries.insert(
            dish.id,
            Delivery {
                dish,
                state: DeliveryState::InFlight,
            },
        );
    }

    /// InFlight -> Resolved. Devuelve el plato solo la primera vez.
    pub fn resolve(&mut self, id: DishId) -> Option<QueuedDish> {
        let delivery = self.deliveries.get_mut(&id)?;
        if delivery.state == DeliveryState::Resolved {
            return None;
        }
        delivery.state = DeliveryState::Resolved;
        Some(delivery.dish.clone())
    }

    /// Olvida el plato. Devuelve true si todavia no se habia resuelto.
    pub fn release(&mut self, id: DishId) -> bool {
        self.deliveries
            .remove(&id)
            .map(|delivery| delivery.state == DeliveryState::InFlight)
            .unwrap_or(false)
    }

    pub fn state(&self, id: DishId) -> Option<DeliveryState> {
        self.deliveries.get(&id).map(|delivery| delivery.state)
    }

    pub fn dish(&self, id: DishId) -> Option<&QueuedDish> {
        self.deliveries
            .get(&id)
            .filter(|delivery| delivery.state == DeliveryState::InFlight)
            .map(|delivery| &delivery.dish)
    }

    pub fn is_in_flight(&self, id: DishId) -> bool {
        self.state(id) == Some(DeliveryState::InFlight)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight().count()
    }

    pub fn has_dish_for(&self, customer_id: CustomerId) -> bool {
        self.in_flight()
            .any(|dish| dish.customer_id == Some(customer_id))
    }

    fn in_flight(&self) -> impl Iterator<Item = &QueuedDish> {
        self.deliveries
            .values()
            .filter(|delivery| delivery.state == DeliveryState::InFlight)
            .map(|delivery| &delivery.dish)
    }
}

impl GameSession {
    /// Manda el primer plato de la cola a la mesa. Una sola entrega a la vez.
    pub fn deliver_next(&mut self) {
        if let Err(error) = self.try_deliver_next() {
            self.reject(error);
        }
    }

    /// Manda todos los platos de la cola a la mesa, escalonando sus salidas
    pub fn deliver_all(&mut self) {
        if let Err(error) = self.try_deliver_all() {
            self.reject(error);
        }
    }

    /// Aviso de un animador que informa por su cuenta: el plato llego
    pub fn complete_delivery(&mut self, dish_id: DishId) {
        if let Err(error) = self.resolve_delivery(dish_id) {
            self.reject(error);
        }
    }

    /// Aviso de un animador que informa por su cuenta: el plato nunca llego
    pub fn abort_delivery(&mut self, dish_id: DishId) {
        if let Err(error) = self.cancel_delivery(dish_id) {
            self.reject(error);
        }
    }

    fn try_deliver_next(&mut self) -> Result<(), GameError> {
        if self.dish_queue.is_empty() || self.deliveries.in_flight_count() > 0 {
            return Err(GameError::InvalidAction(
                "No dish ready or delivery in progress!".to_string(),
            ));
        }
        let dish = self.dish_queue.pop().ok_or(GameError::StaleReference)?;
        self.deliveries.launch(dish.clone());

        self.renderer.render_dish_queue(&self.dish_queue);
        self.renderer
            .show_message(&format!("Serving {}...", dish.recipe.name()), Severity::Info);
        self.animate(&dish);
        Ok(())
    }

    fn try_deliver_all(&mut self) -> Result<(), GameError> {
        if self.dish_queue.len() <= 1 || self.deliveries.in_flight_count() > 0 {
            return Err(GameError::InvalidAction(
                "Not enough dishes in queue or delivery already in progress!".to_string(),
            ));
        }
        let dishes = self.dish_queue.take_all();
        for dish in &dishes {
            self.deliveries.launch(dish.clone());
        }

        self.renderer.render_dish_queue(&self.dish_queue);
        self.renderer.show_message(
            &format!("Serving all {} dishes...", dishes.len()),
            Severity::Info,
        );
        for (index, dish) in dishes.iter().enumerate() {
            if index == 0 {
                self.animate(dish);
            } else {
                let delay = index as u64 * self.config.deliver_all_stagger_ms;
                self.scheduler
                    .schedule(delay, GameEvent::LaunchDelivery(dish.id));
            }
        }
        Ok(())
    }

    pub(crate) fn launch_staggered(&mut self, dish_id: DishId) -> Result<(), GameError> {
        let dish = self
            .deliveries
            .dish(dish_id)
            .cloned()
            .ok_or(GameError::StaleReference)?;
        self.animate(&dish);
        Ok(())
    }

    fn animate(&mut self, dish: &QueuedDish) {
        let visual = dish.recipe.display_visual();
        let plan = self.animator.animate_delivery(&visual, dish);
        debug!(
            "[DELIVERY] Dish {} on its way, {:?} in {} ms",
            dish.id, plan.outcome, plan.duration_ms
        );
        match plan.outcome {
            AnimationOutcome::Finished => {
                self.scheduler
                    .schedule(plan.duration_ms, GameEvent::AnimationFinished(dish.id));
            }
            AnimationOutcome::Cancelled => {
                self.scheduler
                    .schedule(plan.duration_ms, GameEvent::AnimationCancelled(dish.id));
            }
            AnimationOutcome::Unreported => {}
        }
        self.scheduler.schedule(
            plan.duration_ms + self.config.delivery_fallback_grace_ms,
            GameEvent::DeliveryFallback(dish.id),
        );
    }

    /// El plato llego a la mesa: se sirve o se paga por el
    pub(crate) fn resolve_delivery(&mut self, dish_id: DishId) -> Result<(), GameError> {
        let dish = self
            .deliveries
            .resolve(dish_id)
            .ok_or(GameError::StaleReference)?;

        match self.find_recipient(&dish) {
            Ok(customer_id) => {
                let seat_number = self
                    .party
                    .as_ref()
                    .and_then(|party| party.customer(customer_id))
                    .map(|customer| customer.seat_number)
                    .unwrap_or_default();
                let reward = self.config.delivery_reward;
                self.award(reward);
                self.statistics.dishes_delivered += 1;
                info!("[DELIVERY] Dish {} served to {}", dish_id, customer_id);
                self.renderer.show_message(
                    &format!(
                        "Delivered {} to Customer {}! (+{})",
                        dish.recipe.name(),
                        seat_number,
                        reward
                    ),
                    Severity::Success,
                );
                self.start_eating(customer_id)?;
            }
            Err(error) => {
                let penalty = self.config.delivery_penalty;
                self.penalize(penalty);
                self.statistics.failed_deliveries += 1;
                info!("[DELIVERY] Dish {} failed: {}", dish_id, error);
                let reason = if self.nobody_waiting() {
                    "No customers were waiting for any order.".to_string()
                } else {
                    format!("No one waiting wanted {}.", dish.recipe.name())
                };
                let prefix = if dish.recipe.name() == UNKNOWN_DISH_NAME {
                    "Delivered an Unknown Dish!"
                } else {
                    "Wrong Dish!"
                };
                self.renderer.show_message(
                    &format!("{} {} (-{} points)", prefix, reason, penalty),
                    Severity::Error,
                );
            }
        }
        Ok(())
    }

    /// Primero el cliente asignado, despues cualquiera que espere el mismo plato
    fn find_recipient(&self, dish: &QueuedDish) -> Result<CustomerId, GameError> {
        let party = self
            .party
            .as_ref()
            .filter(|party| !party.departing)
            .ok_or(GameError::MissingRecipientAtDelivery)?;
        if !dish.recipe.is_known() {
            return Err(GameError::MissingRecipientAtDelivery);
        }
        let name = dish.recipe.name();
        let bound = dish
            .customer_id
            .and_then(|id| party.customer(id))
            .filter(|customer| customer.wants(name));
        bound
            .or_else(|| party.members.iter().find(|customer| customer.wants(name)))
            .map(|customer| customer.id)
            .ok_or(GameError::MissingRecipientAtDelivery)
    }

    fn nobody_waiting(&self) -> bool {
        self.party
            .as_ref()
            .map(|party| party.waiting().count() == 0)
            .unwrap_or(true)
    }

    pub(crate) fn cancel_delivery(&mut self, dish_id: DishId) -> Result<(), GameError> {
        self.deliveries
            .resolve(dish_id)
            .ok_or(GameError::StaleReference)?;
        warn!("[DELIVERY] Dish {} animation cancelled", dish_id);
        Ok(())
    }

    pub(crate) fn release_delivery(&mut self, dish_id: DishId) {
        if self.deliveries.release(dish_id) {
            warn!("[DELIVERY] Dish {} never arrived, releasing it", dish_id);
        }
    }
}
