//! Game state for gambit: turn order, history with undo, chess clocks and
//! move notation, driven by the rules in `gambit-core`.

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod notation;

pub use clock::{ChessClock, ClockStatus, ManualTime, SystemClock, TimeSource};
pub use config::GameConfig;
pub use error::MoveError;
pub use game::{Game, GameStatus};
