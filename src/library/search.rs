//! Case-insensitive substring search over track display forms.

use super::model::Track;

fn matches(track: &Track, query_lower: &str) -> bool {
    track.display().to_lowercase().contains(query_lower)
}

/// Tracks whose display form contains `query`, ignoring case, in input order.
///
/// An empty query returns every track unchanged.
pub fn filter(tracks: &[Track], query: &str) -> Vec<Track> {
    if query.is_empty() {
        return tracks.to_vec();
    }
    let query_lower = query.to_lowercase();
    tracks
        .iter()
        .filter(|t| matches(t, &query_lower))
        .cloned()
        .collect()
}

/// Like [`filter`] but returns positions into `tracks`, for list views that
/// keep their own rows.
pub fn filter_indices(tracks: &[Track], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..tracks.len()).collect();
    }
    let query_lower = query.to_lowercase();
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| matches(t, &query_lower))
        .map(|(i, _)| i)
        .collect()
}
