//! Comandos del jugador ingresados por la terminal
use std::str::FromStr;

use crate::{dish_queue::DishId, errors::GameError, session::GameSession};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Finish,
    Clear,
    DeliverNext,
    DeliverAll,
    Discard(DishId),
    Stats,
    Help,
    Quit,
}

pub const HELP: &str = "Commands: add <ingredient>, finish, clear, next, all, discard <dish>, stats, help, quit";

impl FromStr for Command {
    type Err = GameError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let argument = words.next();
        match (command.as_str(), argument) {
            ("add", Some(ingredient)) => Ok(Command::Add(ingredient.to_string())),
            ("finish", None) => Ok(Command::Finish),
            ("clear", None) => Ok(Command::Clear),
            ("next", None) => Ok(Command::DeliverNext),
            ("all", None) => Ok(Command::DeliverAll),
            ("discard", Some(id)) => id
                .trim_start_matches('#')
                .parse::<u64>()
                .map(|id| Command::Discard(DishId(id)))
                .map_err(|_| GameError::InvalidAction(format!("'{}' is not a dish number", id))),
            ("stats", None) => Ok(Command::Stats),
            ("help", None) => Ok(Command::Help),
            ("quit", None) | ("exit", None) => Ok(Command::Quit),
            _ => Err(GameError::InvalidAction(format!("Unknown command '{}'. {}", line.trim(), HELP))),
        }
    }
}

impl Command {
    /// Ejecuta el comando. Devuelve false cuando el jugador quiere salir.
    pub fn apply(self, session: &mut GameSession) -> bool {
        match self {
            Command::Add(ingredient) => session.add_ingredient_by_name(&ingredient),
            Command::Finish => session.finish_preparation(),
            Command::Clear => session.clear_preparation(),
            Command::DeliverNext => session.deliver_next(),
            Command::DeliverAll => session.deliver_all(),
            Command::Discard(dish_id) => session.discard_dish(dish_id),
            Command::Stats => session.statistics().print(session.score()),
            Command::Help => println!("{}", HELP),
            Command::Quit => return false,
        }
        true
    }
}
