use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{EngineError, Result};

use super::model::{Library, Track};
use super::tags::read_metadata;

/// True when `path` has one of the configured audio extensions (case-insensitive).
pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    has_extension(path, &settings.normalized_extensions())
}

fn has_extension(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Scan `dir` into a [`Library`].
///
/// Recursive by default; `settings.recursive = false` limits the walk to the
/// root directory and `settings.max_depth` caps it otherwise. An empty result
/// is not an error here, callers decide what an empty library means.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Library> {
    if !dir.is_dir() {
        return Err(EngineError::NotFound(dir.to_path_buf()));
    }

    let exts = settings.normalized_extensions();
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<Track> = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && has_extension(path, &exts) {
            tracks.push(Track::from_metadata(path, read_metadata(path)));
        }
    }

    let library = Library::new(dir, tracks);
    tracing::info!("scanned {}: {} tracks", dir.display(), library.len());
    Ok(library)
}
