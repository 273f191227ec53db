//! Una sesion de juego continua. Es dueña de la mesa, la estacion de preparacion, el mostrador
//! y todos los timers; todas las operaciones del juego pasan por ella.
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    collaborators::{Animator, Renderer, Severity},
    config::GameConfig,
    customer::CustomerId,
    delivery::DeliveryTracker,
    dish_queue::{DishId, DishQueue},
    errors::GameError,
    party::Party,
    preparation::PreparationBuffer,
    recipe::Catalog,
    scheduler::{CancellationRegistry, Scheduler},
    statistics::Statistics,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PonderingComplete(CustomerId),
    EatingTick(CustomerId),
    ClearTable,
    SpawnParty,
    LaunchDelivery(DishId),
    AnimationFinished(DishId),
    AnimationCancelled(DishId),
    DeliveryFallback(DishId),
}

pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) catalog: Catalog,
    pub(crate) renderer: Box<dyn Renderer>,
    pub(crate) animator: Box<dyn Animator>,
    pub(crate) rng: StdRng,
    pub(crate) scheduler: Scheduler<GameEvent>,
    pub(crate) customer_timers: CancellationRegistry<CustomerId>,
    pub(crate) party: Option<Party>,
    pub(crate) preparation: PreparationBuffer,
    pub(crate) dish_queue: DishQueue,
    pub(crate) deliveries: DeliveryTracker,
    pub(crate) score: u32,
    pub(crate) statistics: Statistics,
    next_customer_id: u64,
    next_dish_id: u64,
}

impl GameSession {
    pub fn new(
        config: GameConfig,
        catalog: Catalog,
        renderer: Box<dyn Renderer>,
        animator: Box<dyn Animator>,
    ) -> GameSession {
        Self::with_rng(config, catalog, renderer, animator, StdRng::from_entropy())
    }

    /// Sesion cuyos grupos, tiempos de decision y pedidos son reproducibles
    pub fn with_seed(
        config: GameConfig,
        catalog: Catalog,
        renderer: Box<dyn Renderer>,
        animator: Box<dyn Animator>,
        seed: u64,
    ) -> GameSession {
        Self::with_rng(config, catalog, renderer, animator, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: GameConfig,
        catalog: Catalog,
        renderer: Box<dyn Renderer>,
        animator: Box<dyn Animator>,
        rng: StdRng,
    ) -> GameSession {
        GameSession {
            config,
            catalog,
            renderer,
            animator,
            rng,
            scheduler: Scheduler::new(),
            customer_timers: CancellationRegistry::new(),
            party: None,
            preparation: PreparationBuffer::new(),
            dish_queue: DishQueue::new(),
            deliveries: DeliveryTracker::new(),
            score: 0,
            statistics: Statistics::new(),
            next_customer_id: 0,
            next_dish_id: 0,
        }
    }

    /// Dibuja el restaurante vacio y sienta al primer grupo
    pub fn start(&mut self) {
        info!("[SESSION] Opening with {} recipes on the menu", self.catalog.len());
        self.renderer.render_score(self.score);
        self.renderer.render_prep_buffer(self.preparation.ingredients());
        self.renderer.render_dish_queue(&self.dish_queue);
        self.renderer.render_party(None);
        self.renderer.render_waiting_orders(None);
        self.spawn_party();
        self.renderer
            .show_message("Game Started! A party will arrive shortly.", Severity::Info);
    }

    /// Deja pasar `elapsed_ms` de tiempo de juego, disparando cada timer que vence en el medio
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some((_, event)) = self.scheduler.next_due(until) {
            self.dispatch(event);
        }
        self.scheduler.settle(until);
    }

    fn dispatch(&mut self, event: GameEvent) {
        debug!("[TIMER] {} ms: {:?}", self.scheduler.now(), event);
        let result = match event {
            GameEvent::PonderingComplete(customer_id) => self.handle_pondering_complete(customer_id),
            GameEvent::EatingTick(customer_id) => self.handle_eating_tick(customer_id),
            GameEvent::ClearTable => {
                self.clear_table();
                Ok(())
            }
            GameEvent::SpawnParty => {
                if !self.spawn_party() && self.party.is_none() {
                    self.scheduler
                        .schedule(self.config.party_leave_delay_ms, GameEvent::SpawnParty);
                }
                Ok(())
            }
            GameEvent::LaunchDelivery(dish_id) => self.launch_staggered(dish_id),
            GameEvent::AnimationFinished(dish_id) => self.resolve_delivery(dish_id),
            GameEvent::AnimationCancelled(dish_id) => self.cancel_delivery(dish_id),
            GameEvent::DeliveryFallback(dish_id) => {
                self.release_delivery(dish_id);
                Ok(())
            }
        };
        if let Err(error) = result {
            self.ignore(error);
        }
    }

    /// Muestra una accion rechazada del jugador. Los timers vencidos solo se loguean.
    pub(crate) fn reject(&mut self, error: GameError) {
        match error {
            GameError::StaleReference => debug!("[SESSION] {}", error),
            _ => {
                warn!("[SESSION] Rejected: {}", error);
                self.renderer.show_message(&error.to_string(), Severity::Warning);
            }
        }
    }

    fn ignore(&mut self, error: GameError) {
        match error {
            GameError::StaleReference => debug!("[TIMER] Ignored: {}", error),
            _ => self.reject(error),
        }
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.renderer.render_score(self.score);
    }

    /// El puntaje nunca baja de cero
    pub(crate) fn penalize(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
        self.renderer.render_score(self.score);
    }

    pub(crate) fn next_customer_id(&mut self) -> CustomerId {
        self.next_customer_id += 1;
        CustomerId(self.next_customer_id)
    }

    pub(crate) fn next_dish_id(&mut self) -> DishId {
        self.next_dish_id += 1;
        DishId(self.next_dish_id)
    }

    pub(crate) fn render_table(&mut self) {
        self.renderer.render_party(self.party.as_ref());
        self.renderer.render_waiting_orders(self.party.as_ref());
    }

    pub(crate) fn render_seat(&mut self, customer_id: CustomerId) {
        if let Some(customer) = self.party.as_ref().and_then(|party| party.customer(customer_id)) {
            self.renderer.render_customer_seat(customer);
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn party(&self) -> Option<&Party> {
        self.party.as_ref()
    }

    pub fn dish_queue(&self) -> &DishQueue {
        &self.dish_queue
    }

    pub fn preparation(&self) -> &PreparationBuffer {
        &self.preparation
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_in_flight(&self, dish_id: DishId) -> bool {
        self.deliveries.is_in_flight(dish_id)
    }

    pub fn in_flight_count(&self) -> usize {
        self.deliveries.in_flight_count()
    }

    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
