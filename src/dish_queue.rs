//! Platos preparados que esperan en el mostrador para ser entregados
use std::{collections::VecDeque, fmt};

use crate::{customer::CustomerId, recipe::Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DishId(pub u64);

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedDish {
    pub id: DishId,
    pub recipe: Recipe,
    /// Cliente en espera para el que se preparo este plato, si hay
    pub customer_id: Option<CustomerId>,
}

impl QueuedDish {
    pub fn new(id: DishId, recipe: Recipe, customer_id: Option<CustomerId>) -> QueuedDish {
        QueuedDish {
            id,
            recipe,
            customer_id,
        }
    }
}

/// Platos en el orden en que se prepararon. El primero es el proximo a entregar.
pub struct DishQueue {
    dishes: VecDeque<QueuedDish>,
}

impl DishQueue {
    pub fn new() -> DishQueue {
        DishQueue {
            dishes: VecDeque::new(),
        }
    }

    pub fn push(&mut self, dish: QueuedDish) {
        self.dishes.push_back(dish);
    }

    pub fn pop(&mut self) -> Option<QueuedDish> {
        self.dishes.pop_front()
    }

    pub fn remove(&mut self, id: DishId) -> Option<QueuedDish> {
        let index = self.dishes.iter().position(|dish| dish.id == id)?;
        self.dishes.remove(index)
    }

    /// Vacia la cola, devolviendo todos los platos en orden
    pub fn take_all(&mut self) -> Vec<QueuedDish> {
        self.dishes.drain(..).collect()
    }

    pub fn contains(&self, id: DishId) -> bool {
        self.dishes.iter().any(|dish| dish.id == id)
    }

    pub fn has_dish_for(&self, customer_id: CustomerId) -> bool {
        self.dishes
            .iter()
            .any(|dish| dish.customer_id == Some(customer_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedDish> {
        self.dishes.iter()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
