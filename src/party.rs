//! Un grupo de clientes que comparte una mesa y se va junto
use crate::{
    customer::{Customer, CustomerId},
    errors::GameError,
};

#[derive(Debug, Clone)]
pub struct Party {
    pub members: Vec<Customer>,
    pub satisfaction: usize,
    pub target_satisfaction: usize,
    pub departing: bool,
}

impl Party {
    pub fn new(members: Vec<Customer>) -> Party {
        let target_satisfaction = members.len();
        Party {
            members,
            satisfaction: 0,
            target_satisfaction,
            departing: false,
        }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.members.iter().find(|customer| customer.id == id)
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Result<&mut Customer, GameError> {
        self.members
            .iter_mut()
            .find(|customer| customer.id == id)
            .ok_or(GameError::StaleReference)
    }

    pub fn waiting(&self) -> impl Iterator<Item = &Customer> {
        self.members.iter().filter(|customer| customer.is_waiting())
    }

    /// Cuenta un cliente mas que termino de comer, nunca mas alla del tamaño del grupo
    pub fn record_finished(&mut self) {
        if self.satisfaction < self.target_satisfaction {
            self.satisfaction += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.satisfaction >= self.target_satisfaction
    }
}
