//! Human versus computer Battleship on a 10×10 grid.

pub mod core;
mod logging;
pub mod player;
pub mod prelude;
mod session;

pub use crate::core::*;
pub use logging::init_logging;
pub use player::{AiPlayer, AutoPlayer, CliPlayer, Player};
pub use session::Session;
