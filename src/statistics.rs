use log::info;

/// Contadores de todo lo que paso durante la sesion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub parties_served: u64,
    pub customers_satisfied: u64,
    pub dishes_queued: u64,
    pub dishes_delivered: u64,
    pub failed_deliveries: u64,
    pub dishes_discarded: u64,
    pub dishes_flushed: u64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn summary(&self, score: u32) -> String {
        format!(
            "[STATISTICS] Score={} | Parties served={} | Customers satisfied={} | Dishes=(queued, delivered, failed, discarded, flushed) ({},{},{},{},{})",
            score,
            self.parties_served,
            self.customers_satisfied,
            self.dishes_queued,
            self.dishes_delivered,
            self.failed_deliveries,
            self.dishes_discarded,
            self.dishes_flushed
        )
    }

    pub fn print(&self, score: u32) {
        info!("{}", self.summary(score));
    }
}
