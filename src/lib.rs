//! riffle: a shuffle-first playlist engine for a local music directory.
//!
//! [`library`] scans a directory into [`Track`]s and searches them;
//! [`engine`] keeps the shuffled play order and answers the UI's intents.

pub mod config;
pub mod engine;
pub mod error;
pub mod library;

pub use config::{LibrarySettings, LogSettings, Settings, ShuffleSettings};
pub use engine::{EngineState, HistoryEntry, Intent, PlayOrder, SharedEngine, ShuffleEngine};
pub use error::{EngineError, Result};
pub use library::{Library, Track, filter, scan};
