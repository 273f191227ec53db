//! Lo que el juego necesita de afuera: algo que lo dibuje y algo
//! que lleve los platos a la mesa.
use crate::{
    customer::Customer,
    dish_queue::{DishQueue, QueuedDish},
    ingredient::Ingredient,
    party::Party,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

/// Se llama justo despues de cada cambio en el estado del juego.
/// Si no hay grupo, la mesa esta vacia.
pub trait Renderer {
    fn render_party(&mut self, party: Option<&Party>);
    fn render_customer_seat(&mut self, customer: &Customer);
    fn render_waiting_orders(&mut self, party: Option<&Party>);
    fn render_prep_buffer(&mut self, ingredients: &[Ingredient]);
    fn render_dish_queue(&mut self, queue: &DishQueue);
    fn show_message(&mut self, text: &str, severity: Severity);
    fn render_score(&mut self, score: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// El plato llega a la mesa al terminar la animacion
    Finished,
    /// La animacion se interrumpe y el plato nunca llega
    Cancelled,
    /// El animador avisa por su cuenta, o nunca avisa
    Unreported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPlan {
    pub duration_ms: u64,
    pub outcome: AnimationOutcome,
}

pub trait Animator {
    /// Empieza a llevar `dish` hasta la mesa
    fn animate_delivery(&mut self, visual: &str, dish: &QueuedDish) -> AnimationPlan;
}
