use std::path::Path;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{LibrarySettings, Settings, ShuffleSettings};
use crate::error::{EngineError, Result};
use crate::library::{Library, Track, scan};

use super::cursor::{HistoryEntry, PlaybackCursor};
use super::intent::Intent;
use super::order::PlayOrder;

/// Lifecycle of the engine. Once `Ready`, it stays `Ready` for the process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Ready,
}

/// Library, order and cursor of one session; replaced together.
#[derive(Debug, Clone)]
struct Session {
    library: Library,
    order: PlayOrder,
    cursor: PlaybackCursor,
}

impl Session {
    fn track_at(&self, position: usize) -> &Track {
        &self.library.tracks()[position]
    }

    fn current_track(&self) -> &Track {
        self.track_at(self.cursor.current())
    }

    fn record(&mut self, elapsed: Duration) {
        let track = self.current_track().clone();
        self.cursor.record(track, elapsed);
    }

    fn is_detour(&self) -> bool {
        self.order.get(self.cursor.slot()) != Some(self.cursor.current())
    }
}

/// Owns the play order and cursor for one music directory at a time.
pub struct ShuffleEngine {
    library_settings: LibrarySettings,
    rng: StdRng,
    session: Option<Session>,
}

impl Default for ShuffleEngine {
    fn default() -> Self {
        Self::with_settings(LibrarySettings::default(), ShuffleSettings::default())
    }
}

impl ShuffleEngine {
    pub fn new(settings: &Settings) -> Self {
        Self::with_settings(settings.library.clone(), settings.shuffle.clone())
    }

    pub fn with_settings(library_settings: LibrarySettings, shuffle: ShuffleSettings) -> Self {
        let rng = match shuffle.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            library_settings,
            rng,
            session: None,
        }
    }

    pub fn library_settings(&self) -> &LibrarySettings {
        &self.library_settings
    }

    pub fn state(&self) -> EngineState {
        if self.session.is_some() {
            EngineState::Ready
        } else {
            EngineState::Uninitialized
        }
    }

    /// Scan `dir` and start a new session. Returns the first track to play.
    ///
    /// On failure the previous session (if any) is left untouched.
    pub fn initialize(&mut self, dir: &Path) -> Result<Track> {
        let library = scan(dir, &self.library_settings)?;
        self.load(library)
    }

    /// Start a new session from an already scanned library.
    pub fn load(&mut self, library: Library) -> Result<Track> {
        if library.is_empty() {
            return Err(EngineError::EmptyLibrary(library.root().to_path_buf()));
        }

        let order = PlayOrder::shuffled(library.len(), &mut self.rng);
        let first = order
            .first()
            .ok_or_else(|| EngineError::EmptyLibrary(library.root().to_path_buf()))?;
        tracing::info!(
            "loaded {} tracks from {}",
            library.len(),
            library.root().display()
        );

        let session = Session {
            library,
            order,
            cursor: PlaybackCursor::new(first),
        };
        let track = session.current_track().clone();
        self.session = Some(session);
        Ok(track)
    }

    /// Leave the current track after `elapsed` and move to the next one.
    ///
    /// Past the end of the order the whole library is reshuffled; the new
    /// order never opens with the track that closed the old one, nor with a
    /// jumped-to track that was still playing (when enough tracks exist).
    pub fn advance(&mut self, elapsed: Duration) -> Result<Track> {
        let session = self.session.as_mut().ok_or(EngineError::NotInitialized)?;
        session.record(elapsed);

        let len = session.order.len();
        let next = session.cursor.slot() + 1;
        if next < len {
            let position = session.order.get(next).unwrap_or(0);
            session.cursor.move_to(next, position);
        } else {
            let mut avoid: Vec<usize> = session.order.last().into_iter().collect();
            let playing = session.cursor.current();
            if session.is_detour() && !avoid.contains(&playing) && avoid.len() + 1 < len {
                avoid.push(playing);
            }
            session.order = PlayOrder::shuffled_avoiding_first(len, &avoid, &mut self.rng);
            let position = session.order.first().unwrap_or(0);
            session.cursor.move_to(0, position);
            tracing::debug!("play order wrapped, reshuffled {len} tracks");
        }

        Ok(session.current_track().clone())
    }

    /// Leave the current track after `elapsed` and play `track` instead.
    ///
    /// The play order position does not move: the next `advance` continues
    /// from where the order was before the jump.
    pub fn jump_to(&mut self, elapsed: Duration, track: &Track) -> Result<Track> {
        let session = self.session.as_mut().ok_or(EngineError::NotInitialized)?;
        let position = session
            .library
            .index_of(track.path())
            .ok_or_else(|| EngineError::UnknownTrack(track.path().to_path_buf()))?;

        session.record(elapsed);
        session.cursor.detour_to(position);
        tracing::debug!("jumped to {}", track.path().display());

        Ok(session.current_track().clone())
    }

    /// The track that should be playing now.
    pub fn current(&self) -> Result<Track> {
        self.session
            .as_ref()
            .map(|s| s.current_track().clone())
            .ok_or(EngineError::NotInitialized)
    }

    /// The play order as it stands now. After a wrap this is the new order.
    pub fn tracks(&self) -> Result<Vec<Track>> {
        let session = self.session.as_ref().ok_or(EngineError::NotInitialized)?;
        Ok(session
            .order
            .as_slice()
            .iter()
            .map(|&p| session.track_at(p).clone())
            .collect())
    }

    pub fn library(&self) -> Option<&Library> {
        self.session.as_ref().map(|s| &s.library)
    }

    /// Tracks left so far, oldest first. Empty before initialization.
    pub fn history(&self) -> &[HistoryEntry] {
        self.session
            .as_ref()
            .map(|s| s.cursor.history())
            .unwrap_or(&[])
    }

    /// Position in the play order, if initialized.
    pub fn position(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.cursor.slot())
    }

    /// True while a jumped-to track is playing instead of the order's own.
    pub fn is_detour(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_detour)
    }

    /// Apply an intent and return the track that should be playing after it.
    pub fn handle(&mut self, intent: Intent) -> Result<Track> {
        match intent {
            Intent::Initialize(dir) => self.initialize(&dir),
            Intent::Advance(elapsed) => self.advance(elapsed),
            Intent::JumpTo(elapsed, track) => self.jump_to(elapsed, &track),
            Intent::Current => self.current(),
        }
    }
}
