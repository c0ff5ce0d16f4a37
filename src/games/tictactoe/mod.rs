//! Tic-tac-toe: board, rules, opponents.

mod action;
mod board;
mod error;
pub mod invariants;
mod mode;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::Move;
pub use board::BoardState;
pub use error::GameError;
pub use mode::Mode;
pub use position::Position;
pub use strategy::{RandomStrategy, SmartStrategy, Strategy};
pub use types::{Mark, Player, Status, TurnOutcome};
