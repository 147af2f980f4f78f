//! The shuffle engine: play order, cursor and playback history for one
//! library session.
//!
//! Callers drive it with four intents (initialize, advance, jump, query) and
//! get a [`Track`](crate::library::Track) back from each. The engine never
//! touches audio; the returned track's path is handed to whatever plays it.

mod cursor;
mod intent;
mod model;
mod order;
mod shared;

pub use cursor::{HistoryEntry, PlaybackCursor};
pub use intent::Intent;
pub use model::{EngineState, ShuffleEngine};
pub use order::PlayOrder;
pub use shared::SharedEngine;

#[cfg(test)]
mod tests;
