//! Loop cooperativo de timers sobre un reloj virtual en milisegundos.
//!
//! Los timers se disparan por orden de vencimiento; los empates, por orden de alta.
//! Nada corre entre dos timers, asi que cada handler ve un estado asentado.
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    hash::Hash,
};

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct Timer<E> {
    id: TimerId,
    period: Option<u64>,
    event: E,
}

pub struct Scheduler<E> {
    now: u64,
    next_seq: u64,
    pending: BTreeMap<(u64, u64), Timer<E>>,
    live: HashSet<TimerId>,
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Scheduler<E> {
        Scheduler {
            now: 0,
            next_seq: 0,
            pending: BTreeMap::new(),
            live: HashSet::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Dispara `event` una vez, dentro de `delay_ms`
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let id = TimerId(self.next_seq);
        self.live.insert(id);
        self.push(self.now.saturating_add(delay_ms), id, None, event);
        id
    }

    /// Dispara `event` cada `period_ms` hasta que se cancele
    pub fn schedule_interval(&mut self, period_ms: u64, event: E) -> TimerId {
        let period_ms = period_ms.max(1);
        let id = TimerId(self.next_seq);
        self.live.insert(id);
        self.push(self.now.saturating_add(period_ms), id, Some(period_ms), event);
        id
    }

    /// Cancelar un timer ya disparado o ya cancelado no hace nada
    pub fn cancel(&mut self, id: TimerId) {
        if self.live.remove(&id) {
            trace!("[TIMER] Cancelled {:?}", id);
        }
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.live.contains(&id)
    }

    pub fn live_timers(&self) -> usize {
        self.live.len()
    }

    /// Saca el proximo timer vivo que vence antes o en `until`, moviendo el reloj a su vencimiento
    pub fn next_due(&mut self, until: u64) -> Option<(TimerId, E)> {
        loop {
            let (&(due, seq), _) = self.pending.iter().next()?;
            if due > until {
                return None;
            }
            let timer = self.pending.remove(&(due, seq))?;
            if !self.live.contains(&timer.id) {
                continue;
            }
            self.now = due;
            match timer.period {
                Some(period) => {
                    let event = timer.event.clone();
                    self.push(due.saturating_add(period), timer.id, Some(period), timer.event);
                    return Some((timer.id, event));
                }
                None => {
                    self.live.remove(&timer.id);
                    return Some((timer.id, timer.event));
                }
            }
        }
    }

    /// Avanza el reloj una vez atendidos todos los timers vencidos
    pub fn settle(&mut self, until: u64) {
        if until > self.now {
            self.now = until;
        }
    }

    fn push(&mut self, due: u64, id: TimerId, period: Option<u64>, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((due, seq), Timer { id, period, event });
    }
}

/// Timers vivos agrupados por dueño, para poder descartarlos todos juntos
pub struct CancellationRegistry<K> {
    timers: HashMap<K, TimerId>,
}

impl<K: Eq + Hash + Copy> CancellationRegistry<K> {
    pub fn new() -> CancellationRegistry<K> {
        CancellationRegistry { timers: HashMap::new() }
    }

    /// Registra el timer de `owner`, cancelando el que reemplaza
    pub fn register<E: Clone>(&mut self, scheduler: &mut Scheduler<E>, owner: K, id: TimerId) {
        if let Some(previous) = self.timers.insert(owner, id) {
            scheduler.cancel(previous);
        }
    }

    pub fn release<E: Clone>(&mut self, scheduler: &mut Scheduler<E>, owner: K) {
        if let Some(id) = self.timers.remove(&owner) {
            scheduler.cancel(id);
        }
    }

    pub fn cancel_all<E: Clone>(&mut self, scheduler: &mut Scheduler<E>) {
        for (_, id) in self.timers.drain() {
            scheduler.cancel(id);
        }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
