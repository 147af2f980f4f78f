use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::tags::{TrackMetadata, display_form};

/// One playable audio file plus its display metadata.
///
/// Identity is the path: two `Track`s with the same path are the same song,
/// whatever their tags say.
#[derive(Debug, Clone)]
pub struct Track {
    path: PathBuf,
    title: String,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<Duration>,
    display: String,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>, artist: Option<String>) -> Self {
        let title = title.into();
        let display = display_form(&title, artist.as_deref());
        Self {
            path: path.into(),
            title,
            artist,
            album: None,
            duration: None,
            display,
        }
    }

    pub fn from_metadata(path: impl Into<PathBuf>, meta: TrackMetadata) -> Self {
        let mut track = Self::new(path, meta.title, meta.artist);
        track.album = meta.album;
        track.duration = meta.duration;
        track
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// `"{artist} - {title}"`, or the title alone when there is no artist.
    pub fn display(&self) -> &str {
        &self.display
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// The tracks found under one root directory by one scan.
///
/// Tracks are kept sorted by display form (case-insensitive, ties by path)
/// and deduplicated by path.
#[derive(Debug, Clone, Default)]
pub struct Library {
    root: PathBuf,
    tracks: Vec<Track>,
    by_path: HashMap<PathBuf, usize>,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>, tracks: impl IntoIterator<Item = Track>) -> Self {
        let mut tracks: Vec<Track> = tracks.into_iter().collect();
        tracks.sort_by(|a, b| {
            a.display
                .to_lowercase()
                .cmp(&b.display.to_lowercase())
                .then_with(|| a.path.cmp(&b.path))
        });

        // One track per path, the first in sorted order.
        let mut by_path = HashMap::with_capacity(tracks.len());
        let mut unique = Vec::with_capacity(tracks.len());
        for track in tracks {
            if by_path.contains_key(&track.path) {
                continue;
            }
            by_path.insert(track.path.clone(), unique.len());
            unique.push(track);
        }

        Self {
            root: root.into(),
            tracks: unique,
            by_path,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Position of the track with this path, if it belongs to the library.
    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.by_path.get(path).copied()
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.by_path.contains_key(&track.path)
    }
}
