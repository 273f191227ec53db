//! Ciclo de vida del cliente: Pondering -> Waiting -> Eating -> Finished.
//!
//! Las transiciones solo avanzan. Una transicion pedida desde el estado incorrecto se
//! informa como referencia vencida, que la sesion ignora.
use std::fmt;

use crate::{
    errors::GameError,
    recipe::{DisplayableRecipe, Recipe},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cust_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerState {
    Pondering,
    Waiting,
    Eating,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub seat_number: usize,
    pub state: CustomerState,
    pub order: Option<Recipe>,
    pub eating_progress: u32,
    eaten_ms: u64,
}

impl Customer {
    pub fn new(id: CustomerId, seat_number: usize) -> Customer {
        Customer {
            id,
            seat_number,
            state: CustomerState::Pondering,
            order: None,
            eating_progress: 0,
            eaten_ms: 0,
        }
    }

    /// Termina de decidir con el pedido indicado
    pub fn decide(&mut self, order: Recipe) -> Result<(), GameError> {
        self.require(CustomerState::Pondering)?;
        self.order = Some(order);
        self.state = CustomerState::Waiting;
        Ok(())
    }

    pub fn start_eating(&mut self) -> Result<(), GameError> {
        self.require(CustomerState::Waiting)?;
        self.state = CustomerState::Eating;
        self.eating_progress = 0;
        self.eaten_ms = 0;
        Ok(())
    }

    /// Avanza la comida un tick. Devuelve true cuando este tick la termina.
    pub fn eat(&mut self, tick_ms: u64, eating_time_ms: u64) -> Result<bool, GameError> {
        self.require(CustomerState::Eating)?;
        self.eaten_ms = self.eaten_ms.saturating_add(tick_ms);
        let progress = (self.eaten_ms.saturating_mul(100) / eating_time_ms.max(1)).min(100);
        self.eating_progress = self.eating_progress.max(progress as u32);
        if self.eating_progress >= 100 {
            self.state = CustomerState::Finished;
            return Ok(true);
        }
        Ok(false)
    }

    /// True si esta esperando el plato llamado `name`
    pub fn wants(&self, name: &str) -> bool {
        self.state == CustomerState::Waiting
            && self.order.as_ref().map(|order| order.name() == name).unwrap_or(false)
    }

    pub fn is_waiting(&self) -> bool {
        self.state == CustomerState::Waiting
    }

    fn require(&self, state: CustomerState) -> Result<(), GameError> {
        if self.state == state {
            Ok(())
        } else {
            Err(GameError::StaleReference)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Catalog;

    fn waiting_customer() -> Customer {
        let mut customer = Customer::new(CustomerId(1), 1);
        customer.decide(Catalog::default().recipes()[0].clone()).unwrap();
        customer
    }

    #[test]
    fn should_start_pondering_without_an_order() {
        let customer = Customer::new(CustomerId(1), 1);
        assert_eq!(CustomerState::Pondering, customer.state);
        assert!(customer.order.is_none());
    }

    #[test]
    fn should_wait_after_deciding() {
        let customer = waiting_customer();
        assert_eq!(CustomerState::Waiting, customer.state);
        assert!(customer.wants("Salmon Nigiri"));
        assert!(!customer.wants("Tuna Nigiri"));
    }

    #[test]
    fn should_not_decide_twice() {
        let mut customer = waiting_customer();
        let result = customer.decide(Catalog::default().recipes()[1].clone());
        assert_eq!(Err(GameError::StaleReference), result);
        assert!(customer.wants("Salmon Nigiri"));
    }

    #[test]
    fn should_not_eat_before_ordering() {
        let mut customer = Customer::new(CustomerId(1), 1);
        assert_eq!(Err(GameError::StaleReference), customer.start_eating());
        assert_eq!(CustomerState::Pondering, customer.state);
    }

    #[test]
    fn should_finish_exactly_at_the_end_of_the_meal() {
        let mut customer = waiting_customer();
        customer.start_eating().unwrap();
        for _ in 0..49 {
            assert_eq!(Ok(false), customer.eat(100, 5000));
        }
        assert_eq!(98, customer.eating_progress);
        assert_eq!(Ok(true), customer.eat(100, 5000));
        assert_eq!(100, customer.eating_progress);
        assert_eq!(CustomerState::Finished, customer.state);
    }

    #[test]
    fn should_clamp_progress_when_the_tick_overshoots() {
        let mut customer = waiting_customer();
        customer.start_eating().unwrap();
        assert_eq!(Ok(false), customer.eat(300, 1000));
        assert_eq!(Ok(false), customer.eat(300, 1000));
        assert_eq!(Ok(false), customer.eat(300, 1000));
        assert_eq!(Ok(true), customer.eat(300, 1000));
        assert_eq!(100, customer.eating_progress);
    }

    #[test]
    fn should_never_leave_the_finished_state() {
        let mut customer = waiting_customer();
        customer.start_eating().unwrap();
        customer.eat(5000, 5000).unwrap();
        assert!(customer.start_eating().is_err());
        assert!(customer.eat(100, 5000).is_err());
        assert!(customer.decide(Catalog::default().recipes()[1].clone()).is_err());
        assert_eq!(CustomerState::Finished, customer.state);
        assert!(!customer.is_waiting());
    }
}
