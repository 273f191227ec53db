//! Colaboradores que graban lo que reciben y constructores de sesiones para los tests
use std::{cell::RefCell, rc::Rc};

use crate::{
    collaborators::{AnimationOutcome, AnimationPlan, Animator, Renderer, Severity},
    config::GameConfig,
    customer::{Customer, CustomerId, CustomerState},
    dish_queue::{DishId, DishQueue, QueuedDish},
    ingredient::Ingredient,
    party::Party,
    recipe::{Catalog, DisplayableRecipe},
    session::GameSession,
};

#[derive(Default)]
pub struct Recording {
    pub messages: Vec<(String, Severity)>,
    pub scores: Vec<u32>,
    pub party_renders: usize,
    pub empty_table_renders: usize,
    pub empty_order_renders: usize,
    pub queue_lengths: Vec<usize>,
    pub prep_buffers: Vec<Vec<Ingredient>>,
    pub animated: Vec<(String, DishId)>,
}

impl Recording {
    pub fn last_message(&self) -> Option<&(String, Severity)> {
        self.messages.last()
    }

    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|(message, _)| message.contains(text))
    }
}

pub struct RecordingRenderer(pub Rc<RefCell<Recording>>);

impl Renderer for RecordingRenderer {
    fn render_party(&mut self, party: Option<&Party>) {
        let mut recording = self.0.borrow_mut();
        match party {
            Some(_) => recording.party_renders += 1,
            None => recording.empty_table_renders += 1,
        }
    }

    fn render_customer_seat(&mut self, _customer: &Customer) {}

    fn render_waiting_orders(&mut self, party: Option<&Party>) {
        if party.is_none() {
            self.0.borrow_mut().empty_order_renders += 1;
        }
    }

    fn render_prep_buffer(&mut self, ingredients: &[Ingredient]) {
        self.0.borrow_mut().prep_buffers.push(ingredients.to_vec());
    }

    fn render_dish_queue(&mut self, queue: &DishQueue) {
        self.0.borrow_mut().queue_lengths.push(queue.len());
    }

    fn show_message(&mut self, text: &str, severity: Severity) {
        self.0.borrow_mut().messages.push((text.to_string(), severity));
    }

    fn render_score(&mut self, score: u32) {
        self.0.borrow_mut().scores.push(score);
    }
}

/// Animador cuyo resultado el test puede cambiar entre entregas
pub struct ScriptedAnimator {
    pub recording: Rc<RefCell<Recording>>,
    pub plan: Rc<RefCell<AnimationPlan>>,
}

impl Animator for ScriptedAnimator {
    fn animate_delivery(&mut self, visual: &str, dish: &QueuedDish) -> AnimationPlan {
        self.recording
            .borrow_mut()
            .animated
            .push((visual.to_string(), dish.id));
        *self.plan.borrow()
    }
}

pub const ANIMATION_MS: u64 = 3000;

pub struct Harness {
    pub session: GameSession,
    pub recording: Rc<RefCell<Recording>>,
    pub plan: Rc<RefCell<AnimationPlan>>,
}

/// Grupos de exactamente `party_size`, cada cliente decide en exactamente 1500 ms
pub fn fixed_config(party_size: usize) -> GameConfig {
    GameConfig {
        min_party_size: party_size,
        max_party_size: party_size,
        ponder_time_ms_min: 1500,
        ponder_time_ms_max: 1500,
        ..GameConfig::default()
    }
}

pub fn harness(config: GameConfig) -> Harness {
    let recording = Rc::new(RefCell::new(Recording::default()));
    let plan = Rc::new(RefCell::new(AnimationPlan {
        duration_ms: ANIMATION_MS,
        outcome: AnimationOutcome::Finished,
    }));
    let session = GameSession::with_seed(
        config,
        Catalog::default(),
        Box::new(RecordingRenderer(recording.clone())),
        Box::new(ScriptedAnimator {
            recording: recording.clone(),
            plan: plan.clone(),
        }),
        42,
    );
    Harness {
        session,
        recording,
        plan,
    }
}

impl Harness {
    /// Sesion arrancada cuyos clientes ya decidieron
    pub fn seated(party_size: usize) -> Harness {
        let mut harness = harness(fixed_config(party_size));
        harness.session.start();
        harness.session.advance(1500);
        harness
    }

    pub fn customer(&self, seat_number: usize) -> &Customer {
        &self.session.party().expect("no party at the table").members[seat_number - 1]
    }

    pub fn customer_id(&self, seat_number: usize) -> CustomerId {
        self.customer(seat_number).id
    }

    pub fn state_of(&self, seat_number: usize) -> CustomerState {
        self.customer(seat_number).state
    }

    pub fn order_of(&self, seat_number: usize) -> Vec<Ingredient> {
        self.customer(seat_number)
            .order
            .as_ref()
            .expect("customer has not ordered")
            .ingredients()
            .to_vec()
    }

    pub fn prepare(&mut self, ingredients: &[Ingredient]) {
        for ingredient in ingredients {
            self.session.add_ingredient(*ingredient);
        }
        self.session.finish_preparation();
    }

    /// Prepara lo que pidio el cliente en `seat_number`
    pub fn prepare_order_of(&mut self, seat_number: usize) {
        let order = self.order_of(seat_number);
        self.prepare(&order);
    }

    pub fn queued_ids(&self) -> Vec<DishId> {
        self.session.dish_queue().iter().map(|dish| dish.id).collect()
    }

    pub fn set_outcome(&self, outcome: AnimationOutcome) {
        self.plan.borrow_mut().outcome = outcome;
    }

    /// Cualquier receta que nadie en la mesa pidio
    pub fn unordered_recipe(&self) -> Vec<Ingredient> {
        let party = self.session.party().expect("no party at the table");
        self.session
            .catalog()
            .recipes()
            .iter()
            .find(|recipe| !party.members.iter().any(|customer| customer.wants(recipe.name())))
            .expect("every recipe was ordered")
            .ingredients()
            .to_vec()
    }
}
