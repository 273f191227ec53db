//! Interfaz de terminal: la mesa se dibuja como lineas de log y las entregas usan un tiempo fijo
use log::{debug, info};
use std::time::{Duration, Instant};

use crate::{
    collaborators::{AnimationOutcome, AnimationPlan, Animator, Renderer, Severity},
    customer::{Customer, CustomerState},
    dish_queue::{DishQueue, QueuedDish},
    ingredient::{tokens, Ingredient},
    party::Party,
    recipe::DisplayableRecipe,
};

pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> ConsoleRenderer {
        ConsoleRenderer
    }
}

fn seat_status(customer: &Customer) -> String {
    match (customer.state, customer.order.as_ref()) {
        (CustomerState::Pondering, _) => "Thinking...".to_string(),
        (CustomerState::Waiting, Some(order)) => format!("{} {}", order.name(), order.display_visual()),
        (CustomerState::Eating, Some(order)) => {
            format!("eating {} ({}%)", order.display_visual(), customer.eating_progress)
        }
        (CustomerState::Finished, _) => "✅ Satisfied!".to_string(),
        (_, None) => "?".to_string(),
    }
}

impl Renderer for ConsoleRenderer {
    fn render_party(&mut self, party: Option<&Party>) {
        match party {
            Some(party) => {
                info!("[TABLE] Satisfaction {} / {}", party.satisfaction, party.target_satisfaction);
                for customer in &party.members {
                    info!("[TABLE] Customer {}: {}", customer.seat_number, seat_status(customer));
                }
            }
            None => info!("[TABLE] Table is empty... (-- / --)"),
        }
    }

    fn render_customer_seat(&mut self, customer: &Customer) {
        if customer.state == CustomerState::Eating {
            debug!("[TABLE] Customer {}: {}", customer.seat_number, seat_status(customer));
        } else {
            info!("[TABLE] Customer {}: {}", customer.seat_number, seat_status(customer));
        }
    }

    fn render_waiting_orders(&mut self, party: Option<&Party>) {
        let Some(party) = party else {
            info!("[ORDERS] No party at table...");
            return;
        };
        let orders: Vec<String> = party
            .waiting()
            .filter_map(|customer| {
                customer
                    .order
                    .as_ref()
                    .map(|order| format!("C{}: {} {}", customer.seat_number, order.name(), order.display_visual()))
            })
            .collect();
        if orders.is_empty() {
            info!("[ORDERS] No orders waiting...");
        } else {
            info!("[ORDERS] {}", orders.join(" | "));
        }
    }

    fn render_prep_buffer(&mut self, ingredients: &[Ingredient]) {
        info!("[PREP] {}", tokens(ingredients));
    }

    fn render_dish_queue(&mut self, queue: &DishQueue) {
        let dishes: Vec<String> = queue
            .iter()
            .map(|dish| format!("#{} {}", dish.id, dish.recipe.display_visual()))
            .collect();
        info!("[COUNTER] {}", dishes.join("  "));
    }

    fn show_message(&mut self, text: &str, severity: Severity) {
        let marker = match severity {
            Severity::Neutral => "  ",
            Severity::Info => "ℹ️",
            Severity::Success => "✅",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        };
        println!("{} {}", marker, text);
    }

    fn render_score(&mut self, score: u32) {
        info!("[SCORE] {}", score);
    }
}

/// Todos los platos tardan lo mismo en llegar a la mesa y siempre llegan
pub struct TimedAnimator {
    duration_ms: u64,
}

impl TimedAnimator {
    pub fn new(duration_ms: u64) -> TimedAnimator {
        TimedAnimator { duration_ms }
    }
}

impl Animator for TimedAnimator {
    fn animate_delivery(&mut self, visual: &str, dish: &QueuedDish) -> AnimationPlan {
        info!("[BELT] {} (#{}) orbits towards the table", visual, dish.id);
        AnimationPlan {
            duration_ms: self.duration_ms,
            outcome: AnimationOutcome::Finished,
        }
    }
}

/// Reloj real del loop de la terminal. Los milisegundos se cuentan desde el inicio de la
/// sesion, asi no se pierden las fracciones que sobran en cada frame.
pub struct FrameClock {
    started: Instant,
    advanced_ms: u64,
}

impl FrameClock {
    pub fn start() -> FrameClock {
        FrameClock {
            started: Instant::now(),
            advanced_ms: 0,
        }
    }

    /// Milisegundos que tiene que avanzar el juego desde el tick anterior
    pub fn tick(&mut self) -> u64 {
        self.tick_at(self.started.elapsed())
    }

    fn tick_at(&mut self, since_start: Duration) -> u64 {
        let elapsed_ms = u64::try_from(since_start.as_millis()).unwrap_or(u64::MAX);
        let delta = elapsed_ms.saturating_sub(self.advanced_ms);
        self.advanced_ms = elapsed_ms;
        delta
    }
}
