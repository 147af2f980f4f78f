use std::path::PathBuf;
use std::time::Duration;

use crate::library::Track;

/// A request from the UI to the engine. Each one is answered with the track
/// that should be playing afterwards.
#[derive(Debug, Clone)]
pub enum Intent {
    /// Scan a directory and start a fresh shuffled session.
    Initialize(PathBuf),
    /// Move to the next track; carries how long the current one played.
    Advance(Duration),
    /// Play a specific track without disturbing the shuffle order.
    JumpTo(Duration, Track),
    /// Ask what is playing now.
    Current,
}
