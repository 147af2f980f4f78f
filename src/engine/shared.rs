use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::LibrarySettings;
use crate::error::Result;
use crate::library::{Library, Track, scan};

use super::cursor::HistoryEntry;
use super::intent::Intent;
use super::model::{EngineState, ShuffleEngine};

/// A [`ShuffleEngine`] shared between threads (e.g. a UI thread and a
/// prefetcher).
///
/// Every call holds the lock for its whole duration, so a caller never sees
/// a cursor whose position and current track disagree. Directory scans run
/// before the lock is taken; only the session swap is serialized.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<ShuffleEngine>>,
    library_settings: LibrarySettings,
}

impl SharedEngine {
    pub fn new(engine: ShuffleEngine) -> Self {
        let library_settings = engine.library_settings().clone();
        Self {
            inner: Arc::new(Mutex::new(engine)),
            library_settings,
        }
    }

    // Engine state is consistent between calls; poisoning is recoverable.
    fn lock(&self) -> MutexGuard<'_, ShuffleEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn initialize(&self, dir: &Path) -> Result<Track> {
        let library = scan(dir, &self.library_settings)?;
        self.load(library)
    }

    pub fn load(&self, library: Library) -> Result<Track> {
        self.lock().load(library)
    }

    pub fn advance(&self, elapsed: Duration) -> Result<Track> {
        self.lock().advance(elapsed)
    }

    pub fn jump_to(&self, elapsed: Duration, track: &Track) -> Result<Track> {
        self.lock().jump_to(elapsed, track)
    }

    pub fn current(&self) -> Result<Track> {
        self.lock().current()
    }

    pub fn tracks(&self) -> Result<Vec<Track>> {
        self.lock().tracks()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock().history().to_vec()
    }

    pub fn state(&self) -> EngineState {
        self.lock().state()
    }

    pub fn handle(&self, intent: Intent) -> Result<Track> {
        match intent {
            Intent::Initialize(dir) => self.initialize(&dir),
            other => self.lock().handle(other),
        }
    }
}
