//! Strictly Tic-Tac-Toe - a type-safe tic-tac-toe engine
//!
//! This library tracks a 3x3 board, validates moves, detects wins and ties,
//! and can answer each human move with an automated opponent.
//!
//! # Architecture
//!
//! - **Board**: the nine cells and the line geometry used for win checks
//! - **Strategy**: stateless automated opponents (random, smart)
//! - **Session**: one game, its mode and status, and the turn logic
//! - **Config**: session settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameSession, Mode, Player, TurnOutcome};
//!
//! let mut session = GameSession::with_seed(Mode::HumanVsHuman, 42);
//! for (cell, player) in [(1, Player::X), (4, Player::O), (2, Player::X), (5, Player::O)] {
//!     session.execute_turn(cell, player)?;
//! }
//! assert_eq!(session.execute_turn(3, Player::X)?, TurnOutcome::Won(Player::X));
//! # Ok::<(), strictly_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Session management
pub use session::{new_session, GameSession};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    invariants, rules, BoardState, GameError, Mark, Mode, Move, Player, Position,
    RandomStrategy, SmartStrategy, Status, Strategy, TurnOutcome,
};
