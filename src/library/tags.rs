use std::borrow::Cow;
use std::path::Path;
use std::time::Duration;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};

/// Display metadata pulled from a file's embedded tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

impl TrackMetadata {
    /// Metadata for a file whose tags could not be used: title = file stem.
    pub fn fallback(path: &Path) -> Self {
        Self {
            title: file_stem_title(path),
            artist: None,
            album: None,
            duration: None,
        }
    }
}

/// `"{artist} - {title}"` when an artist is present, otherwise just the title.
pub fn display_form(title: &str, artist: Option<&str>) -> String {
    match artist.map(str::trim) {
        Some(a) if !a.is_empty() => format!("{a} - {title}"),
        _ => title.to_string(),
    }
}

fn file_stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

fn non_blank(v: Option<Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Read title/artist/album/duration from `path` without decoding audio.
///
/// Never fails: unreadable files and missing fields fall back to the file
/// stem as title with no artist, so one bad file cannot abort a scan.
pub fn read_metadata(path: &Path) -> TrackMetadata {
    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            tracing::debug!("no usable tags in {}: {e}", path.display());
            return TrackMetadata::fallback(path);
        }
    };

    let mut meta = TrackMetadata::fallback(path);
    meta.duration = Some(tagged.properties().duration());

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        if let Some(title) = non_blank(tag.title()) {
            meta.title = title;
        }
        meta.artist = non_blank(tag.artist());
        meta.album = non_blank(tag.album());
    }

    meta
}
