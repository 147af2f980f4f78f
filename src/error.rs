//! Error types for the shuffle engine and library scanner.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by [`crate::engine::ShuffleEngine`] and [`crate::library::scan`].
///
/// Every variant leaves the engine in the state it had before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The music directory does not exist or is not a directory.
    #[error("music directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The directory holds no files with a supported audio extension.
    #[error("no supported audio files under {}", .0.display())]
    EmptyLibrary(PathBuf),

    /// A playback operation was issued before a library was loaded.
    #[error("engine is not initialized")]
    NotInitialized,

    /// The jump target is not part of the loaded library.
    #[error("track is not in the current library: {}", .0.display())]
    UnknownTrack(PathBuf),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
