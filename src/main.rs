pub mod collaborators;
pub mod commands;
pub mod config;
pub mod console;
pub mod constants;
pub mod customer;
pub mod delivery;
pub mod dish_queue;
pub mod errors;
pub mod ingredient;
pub mod menu_reader;
pub mod order_matching;
pub mod party;
pub mod party_manager;
pub mod prep_station;
pub mod preparation;
pub mod recipe;
pub mod scheduler;
pub mod session;
pub mod statistics;
#[cfg(test)]
mod test_support;

use std::{
    env,
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
    time::Duration,
};

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use commands::{Command, HELP};
use config::read_config_or_default;
use console::{ConsoleRenderer, FrameClock, TimedAnimator};
use constants::{TERMINAL_ANIMATION_MS, TERMINAL_FRAME_MS};
use menu_reader::read_menu_or_default;
use session::GameSession;

fn spawn_command_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        return;
                    }
                }
                Err(error) => {
                    error!("[INPUT] Error while reading stdin: {}", error);
                    return;
                }
            }
        }
    });
    receiver
}

fn main() {
    if let Err(error) = SimpleLogger::new().with_level(LevelFilter::Trace).init() {
        eprintln!("Could not start the logger: {}", error);
    }
    log::set_max_level(LevelFilter::Info);
    let config = read_config_or_default(env::args().nth(1));
    log::set_max_level(config.log_level());
    let catalog = read_menu_or_default(config.menu_path.clone());

    let mut session = GameSession::new(
        config,
        catalog,
        Box::new(ConsoleRenderer::new()),
        Box::new(TimedAnimator::new(TERMINAL_ANIMATION_MS)),
    );
    let commands = spawn_command_reader();
    println!("{}", HELP);
    session.start();

    let mut clock = FrameClock::start();
    loop {
        match commands.try_recv() {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => match line.parse::<Command>() {
                Ok(command) => {
                    if !command.apply(&mut session) {
                        break;
                    }
                }
                Err(error) => println!("⚠️ {}", error),
            },
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }
        thread::sleep(Duration::from_millis(TERMINAL_FRAME_MS));
        session.advance(clock.tick());
    }

    info!("[SESSION] Closing");
    session.statistics().print(session.score());
}
