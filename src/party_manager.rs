//! Llegada, timers del ciclo de vida y partida del grupo sentado a la mesa
use log::{debug, info};
use rand::{distributions::Uniform, seq::SliceRandom, Rng};

use crate::{
    collaborators::Severity,
    customer::{Customer, CustomerId, CustomerState},
    errors::GameError,
    party::Party,
    recipe::DisplayableRecipe,
    session::{GameEvent, GameSession},
};

impl GameSession {
    /// Sienta un grupo nuevo. No hace nada si la mesa esta ocupada o si todavia
    /// hay un plato en camino; devuelve si se sento un grupo.
    pub fn spawn_party(&mut self) -> bool {
        if self.party.is_some() || self.deliveries.in_flight_count() > 0 {
            debug!(
                "[PARTY] Cannot seat a party: table taken ({}) or {} dishes travelling",
                self.party.is_some(),
                self.deliveries.in_flight_count()
            );
            return false;
        }

        let size = self.rng.sample(Uniform::new_inclusive(
            self.config.min_party_size,
            self.config.max_party_size,
        ));
        let mut members = Vec::with_capacity(size);
        for seat_number in 1..=size {
            let customer_id = self.next_customer_id();
            let ponder_ms = self.rng.sample(Uniform::new_inclusive(
                self.config.ponder_time_ms_min,
                self.config.ponder_time_ms_max,
            ));
            let timer = self
                .scheduler
                .schedule(ponder_ms, GameEvent::PonderingComplete(customer_id));
            self.customer_timers
                .register(&mut self.scheduler, customer_id, timer);
            debug!("[CUSTOMER {}] Seat {} ponders for {} ms", customer_id, seat_number, ponder_ms);
            members.push(Customer::new(customer_id, seat_number));
        }
        self.party = Some(Party::new(members));

        info!("[PARTY] A party of {} sits down", size);
        self.renderer
            .show_message(&format!("A party of {} is arriving!", size), Severity::Info);
        self.render_table();
        true
    }

    pub(crate) fn handle_pondering_complete(&mut self, customer_id: CustomerId) -> Result<(), GameError> {
        let party = self.party.as_mut().ok_or(GameError::StaleReference)?;
        let customer = party.customer_mut(customer_id)?;
        if customer.state != CustomerState::Pondering {
            return Err(GameError::StaleReference);
        }
        let order = self
            .catalog
            .recipes()
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| GameError::InvalidConfiguration("the menu has no recipes".to_string()))?;
        customer.decide(order)?;
        info!(
            "[CUSTOMER {}] Seat {} orders {}",
            customer_id,
            customer.seat_number,
            customer.order.as_ref().map(|order| order.name()).unwrap_or("?")
        );
        self.customer_timers.release(&mut self.scheduler, customer_id);
        self.render_seat(customer_id);
        self.renderer.render_waiting_orders(self.party.as_ref());
        Ok(())
    }

    /// Waiting -> Eating, arrancando los ticks de la comida
    pub(crate) fn start_eating(&mut self, customer_id: CustomerId) -> Result<(), GameError> {
        let party = self.party.as_mut().ok_or(GameError::StaleReference)?;
        party.customer_mut(customer_id)?.start_eating()?;
        let timer = self.scheduler.schedule_interval(
            self.config.eating_update_interval_ms,
            GameEvent::EatingTick(customer_id),
        );
        self.customer_timers
            .register(&mut self.scheduler, customer_id, timer);
        debug!("[CUSTOMER {}] Starts eating", customer_id);
        self.render_seat(customer_id);
        self.renderer.render_waiting_orders(self.party.as_ref());
        Ok(())
    }

    pub(crate) fn handle_eating_tick(&mut self, customer_id: CustomerId) -> Result<(), GameError> {
        let tick_ms = self.config.eating_update_interval_ms;
        let eating_time_ms = self.config.eating_time_ms;
        let finished = match self.party.as_mut() {
            Some(party) => party
                .customer_mut(customer_id)
                .and_then(|customer| customer.eat(tick_ms, eating_time_ms)),
            None => Err(GameError::StaleReference),
        };
        let finished = match finished {
            Ok(finished) => finished,
            Err(error) => {
                self.customer_timers.release(&mut self.scheduler, customer_id);
                return Err(error);
            }
        };

        if !finished {
            self.render_seat(customer_id);
            return Ok(());
        }

        self.customer_timers.release(&mut self.scheduler, customer_id);
        let party = self.party.as_mut().ok_or(GameError::StaleReference)?;
        party.record_finished();
        let seat_number = party
            .customer(customer_id)
            .map(|customer| customer.seat_number)
            .unwrap_or_default();
        let message = format!(
            "Customer {} finished! Satisfaction: {}/{}",
            seat_number, party.satisfaction, party.target_satisfaction
        );
        self.statistics.customers_satisfied += 1;
        info!("[CUSTOMER {}] {}", customer_id, message);
        self.render_seat(customer_id);
        self.renderer.render_party(self.party.as_ref());
        self.renderer.show_message(&message, Severity::Neutral);
        self.check_completion();
        Ok(())
    }

    /// Empieza la partida cuando todos en la mesa terminaron de comer
    pub(crate) fn check_completion(&mut self) {
        let Some(party) = self.party.as_mut() else {
            return;
        };
        if !party.is_complete() || party.departing {
            return;
        }
        party.departing = true;

        self.customer_timers.cancel_all(&mut self.scheduler);
        let flushed = self.dish_queue.take_all().len();
        self.statistics.dishes_flushed += flushed as u64;
        info!("[PARTY] Satisfied, leaving. {} undelivered dishes thrown away", flushed);

        self.renderer
            .show_message("Party satisfied! They are leaving.", Severity::Success);
        self.renderer.render_dish_queue(&self.dish_queue);
        self.scheduler
            .schedule(self.config.party_departure_delay_ms, GameEvent::ClearTable);
    }

    pub(crate) fn clear_table(&mut self) {
        if self.party.take().is_none() {
            return;
        }
        self.statistics.parties_served += 1;
        info!("[PARTY] Table cleared");
        self.render_table();
        self.renderer
            .show_message("Table empty. Next party arriving soon...", Severity::Neutral);
        self.scheduler
            .schedule(self.config.party_leave_delay_ms, GameEvent::SpawnParty);
    }
}
