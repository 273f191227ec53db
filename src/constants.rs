//! Parametros por defecto del mostrador de sushi

/// Cantidad minima de clientes en un grupo
pub const MIN_PARTY_SIZE: usize = 1;

/// Cantidad maxima de clientes en un grupo
pub const MAX_PARTY_SIZE: usize = 4;

/// Grupo mas grande que puede pedir una configuracion
pub const MAX_TABLE_SEATS: usize = 8;

/// Tiempo minimo que tarda un cliente en decidir que pedir
pub const PONDER_TIME_MS_MIN: u64 = 1500;

/// Tiempo maximo que tarda un cliente en decidir que pedir
pub const PONDER_TIME_MS_MAX: u64 = 3500;

/// Tiempo de decision mas largo que puede pedir una configuracion
pub const PONDER_TIME_MS_LIMIT: u64 = 60_000;

/// Tiempo total que necesita un cliente para terminar un plato
pub const EATING_TIME_MS: u64 = 5000;

/// Cada cuanto se actualiza el progreso de un cliente que esta comiendo
pub const EATING_UPDATE_INTERVAL_MS: u64 = 100;

/// Tiempo entre que un grupo satisfecho se levanta y se limpia la mesa
pub const PARTY_DEPARTURE_DELAY_MS: u64 = 1500;

/// Tiempo entre que se limpia la mesa y llega el siguiente grupo
pub const PARTY_LEAVE_DELAY_MS: u64 = 2000;

/// Demora entre el inicio de cada animacion al entregar todos los platos de la cola
pub const DELIVER_ALL_STAGGER_MS: u64 = 300;

/// Tiempo extra, ademas de la animacion esperada, antes de liberar igual un plato en camino
pub const DELIVERY_FALLBACK_GRACE_MS: u64 = 500;

/// Puntos que se ganan cuando un plato llega a un cliente que lo pidio
pub const DELIVERY_REWARD: u32 = 10;

/// Puntos que se pierden cuando un plato no le llega a nadie que lo quisiera
pub const DELIVERY_PENALTY: u32 = 5;

/// Puntos que se pierden al tirar un plato de la cola
pub const DISCARD_PENALTY: u32 = 1;

/// Tiempo que tarda una entrega en la interfaz de terminal
pub const TERMINAL_ANIMATION_MS: u64 = 3000;

/// Cada cuanto la interfaz de terminal avanza el reloj del juego
pub const TERMINAL_FRAME_MS: u64 = 50;
