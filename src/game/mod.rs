//! Live play on top of the board model.
//!
//! - `config`: which board a game starts from
//! - `history`: confirmed moves for undo
//! - `session`: the `Game` and its select/confirm protocol

pub mod config;
pub mod history;
pub mod session;

pub use config::{GameConfig, StartingShape};
pub use history::{HistoryEntry, MoveHistory};
pub use session::{Game, PlayOutcome, Rejection, Selection};
