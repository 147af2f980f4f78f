//! Music library: track model, tag reading, directory scanning and search.
//!
//! A [`Library`] is an immutable snapshot of one directory scan. Rescanning
//! produces a new `Library`; nothing here mutates one after construction.

mod model;
mod scan;
mod search;
mod tags;

pub use model::{Library, Track};
pub use scan::{is_audio_file, scan};
pub use search::{filter, filter_indices};
pub use tags::{TrackMetadata, display_form, read_metadata};
