//! Parametros del juego. Cualquier campo se puede sobreescribir desde un JSON.
use log::{info, warn, LevelFilter};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::errors::GameError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub min_party_size: usize,
    pub max_party_size: usize,
    pub ponder_time_ms_min: u64,
    pub ponder_time_ms_max: u64,
    pub eating_time_ms: u64,
    pub eating_update_interval_ms: u64,
    pub party_departure_delay_ms: u64,
    pub party_leave_delay_ms: u64,
    pub deliver_all_stagger_ms: u64,
    pub delivery_fallback_grace_ms: u64,
    pub delivery_reward: u32,
    pub delivery_penalty: u32,
    pub discard_penalty: u32,
    pub menu_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_party_size: MIN_PARTY_SIZE,
            max_party_size: MAX_PARTY_SIZE,
            ponder_time_ms_min: PONDER_TIME_MS_MIN,
            ponder_time_ms_max: PONDER_TIME_MS_MAX,
            eating_time_ms: EATING_TIME_MS,
            eating_update_interval_ms: EATING_UPDATE_INTERVAL_MS,
            party_departure_delay_ms: PARTY_DEPARTURE_DELAY_MS,
            party_leave_delay_ms: PARTY_LEAVE_DELAY_MS,
            deliver_all_stagger_ms: DELIVER_ALL_STAGGER_MS,
            delivery_fallback_grace_ms: DELIVERY_FALLBACK_GRACE_MS,
            delivery_reward: DELIVERY_REWARD,
            delivery_penalty: DELIVERY_PENALTY,
            discard_penalty: DISCARD_PENALTY,
            menu_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_party_size == 0 {
            return Err(invalid("a party needs at least one customer"));
        }
        if self.min_party_size > self.max_party_size {
            return Err(invalid("min_party_size is bigger than max_party_size"));
        }
        if self.max_party_size > MAX_TABLE_SEATS {
            return Err(invalid("max_party_size does not fit at the table"));
        }
        if self.ponder_time_ms_max > PONDER_TIME_MS_LIMIT {
            return Err(invalid("ponder_time_ms_max is too long"));
        }
        if self.ponder_time_ms_min > self.ponder_time_ms_max {
            return Err(invalid("ponder_time_ms_min is bigger than ponder_time_ms_max"));
        }
        if self.eating_time_ms == 0 || self.eating_update_interval_ms == 0 {
            return Err(invalid("eating times must be positive"));
        }
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn invalid(reason: &str) -> GameError {
    GameError::InvalidConfiguration(reason.to_string())
}

fn read_config_from_file<P: AsRef<Path>>(path: P) -> Result<GameConfig, GameError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: GameConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Lee la configuracion de `path`. Si el archivo falta o es invalido se usan los valores por defecto.
pub fn read_config_or_default<P: AsRef<Path>>(path: Option<P>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    match read_config_from_file(&path) {
        Ok(config) => {
            info!("[CONFIG] Loaded {}", path.as_ref().display());
            config
        }
        Err(error) => {
            warn!("[CONFIG] {}, using defaults", error);
            GameConfig::default()
        }
    }
}
