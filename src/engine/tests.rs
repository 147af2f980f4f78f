use super::*;
use crate::config::{LibrarySettings, ShuffleSettings};
use crate::error::EngineError;
use crate::library::{Library, Track};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

fn library(n: usize) -> Library {
    Library::new(
        "/music",
        (0..n).map(|i| Track::new(format!("/music/{i:02}.mp3"), format!("Track {i:02}"), None)),
    )
}

fn seeded(seed: u64) -> ShuffleEngine {
    ShuffleEngine::with_settings(
        LibrarySettings::default(),
        ShuffleSettings { seed: Some(seed) },
    )
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn operations_before_initialize_fail_without_side_effects() {
    let mut engine = seeded(1);
    let stray = Track::new("/music/00.mp3", "Track 00", None);

    assert_eq!(engine.advance(secs(1)), Err(EngineError::NotInitialized));
    assert_eq!(
        engine.jump_to(secs(1), &stray),
        Err(EngineError::NotInitialized)
    );
    assert_eq!(engine.current(), Err(EngineError::NotInitialized));
    assert_eq!(engine.tracks(), Err(EngineError::NotInitialized));

    assert_eq!(engine.state(), EngineState::Uninitialized);
    assert!(engine.history().is_empty());
    assert_eq!(engine.position(), None);
    assert!(engine.library().is_none());
}

#[test]
fn load_returns_head_of_a_full_permutation() {
    let mut engine = seeded(2);
    let first = engine.load(library(8)).unwrap();

    let order = engine.tracks().unwrap();
    assert_eq!(order.len(), 8);
    assert_eq!(order.iter().collect::<HashSet<_>>().len(), 8);
    assert_eq!(order[0], first);
    assert_eq!(engine.current().unwrap(), first);
    assert_eq!(engine.state(), EngineState::Ready);
    assert_eq!(engine.position(), Some(0));
    assert!(!engine.is_detour());
}

#[test]
fn load_of_empty_library_is_rejected_and_keeps_state() {
    let mut engine = seeded(3);
    assert_eq!(
        engine.load(Library::new("/empty", Vec::new())),
        Err(EngineError::EmptyLibrary(PathBuf::from("/empty")))
    );
    assert_eq!(engine.state(), EngineState::Uninitialized);

    let first = engine.load(library(3)).unwrap();
    assert!(engine.load(Library::new("/empty", Vec::new())).is_err());
    assert_eq!(engine.current().unwrap(), first);
    assert_eq!(engine.library().unwrap().len(), 3);
}

#[test]
fn advance_walks_the_order_and_records_history() {
    let mut engine = seeded(4);
    engine.load(library(4)).unwrap();
    let order = engine.tracks().unwrap();

    assert_eq!(engine.advance(secs(10)).unwrap(), order[1]);
    assert_eq!(engine.advance(secs(20)).unwrap(), order[2]);
    assert_eq!(engine.position(), Some(2));

    let history = engine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].track, order[0]);
    assert_eq!(history[0].elapsed, secs(10));
    assert_eq!(history[1].track, order[1]);
    assert_eq!(history[1].elapsed, secs(20));
}

#[test]
fn wrap_reshuffles_without_repeating_the_last_track() {
    for seed in 0..200 {
        let mut engine = seeded(seed);
        engine.load(library(3)).unwrap();
        let before = engine.tracks().unwrap();

        engine.advance(secs(1)).unwrap();
        let last = engine.advance(secs(1)).unwrap();
        assert_eq!(last, before[2]);

        let after_wrap = engine.advance(secs(1)).unwrap();
        assert_ne!(after_wrap, last, "seed {seed} repeated across the wrap");
        assert_eq!(engine.position(), Some(0));

        let new_order = engine.tracks().unwrap();
        assert_eq!(new_order[0], after_wrap);
        assert_eq!(new_order.iter().collect::<HashSet<_>>().len(), 3);
    }
}

#[test]
fn single_track_library_repeats_forever() {
    let mut engine = seeded(5);
    let only = engine.load(library(1)).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.advance(secs(3)).unwrap(), only);
    }
    assert_eq!(engine.history().len(), 5);
}

#[test]
fn jump_is_a_detour_that_does_not_reorder() {
    let mut engine = seeded(6);
    engine.load(library(5)).unwrap();
    let order = engine.tracks().unwrap();

    engine.advance(secs(5)).unwrap();
    let target = order[4].clone();
    assert_eq!(engine.jump_to(secs(7), &target).unwrap(), target);
    assert_eq!(engine.current().unwrap(), target);
    assert_eq!(engine.position(), Some(1));
    assert!(engine.is_detour());
    assert_eq!(engine.tracks().unwrap(), order);

    // Resumes after the pre-jump track, not after the jump target.
    assert_eq!(engine.advance(secs(9)).unwrap(), order[2]);
    assert!(!engine.is_detour());

    let history = engine.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].track, order[1]);
    assert_eq!(history[1].elapsed, secs(7));
    assert_eq!(history[2].track, target);
    assert_eq!(history[2].elapsed, secs(9));
}

#[test]
fn jump_to_unknown_track_fails_and_changes_nothing() {
    let mut engine = seeded(7);
    let first = engine.load(library(3)).unwrap();
    let stranger = Track::new("/elsewhere/song.mp3", "Song", None);

    assert_eq!(
        engine.jump_to(secs(1), &stranger),
        Err(EngineError::UnknownTrack(PathBuf::from("/elsewhere/song.mp3")))
    );
    assert_eq!(engine.current().unwrap(), first);
    assert!(engine.history().is_empty());
    assert_eq!(engine.position(), Some(0));
}

#[test]
fn jump_matches_by_path_and_returns_library_copy() {
    let mut engine = seeded(8);
    engine.load(library(3)).unwrap();

    let by_path = Track::new("/music/01.mp3", "stale title", None);
    let played = engine.jump_to(secs(0), &by_path).unwrap();
    assert_eq!(played.title(), "Track 01");
}

#[test]
fn wrap_during_detour_avoids_the_detour_track_too() {
    for seed in 0..200 {
        let mut engine = seeded(seed);
        engine.load(library(4)).unwrap();
        let order = engine.tracks().unwrap();

        for _ in 0..3 {
            engine.advance(secs(1)).unwrap();
        }
        engine.jump_to(secs(1), &order[0]).unwrap();
        let next = engine.advance(secs(1)).unwrap();

        assert_ne!(next, order[3], "seed {seed} repeated the old last track");
        assert_ne!(next, order[0], "seed {seed} repeated the detour track");
    }
}

#[test]
fn same_seed_gives_same_orders() {
    let mut a = seeded(99);
    let mut b = seeded(99);
    a.load(library(10)).unwrap();
    b.load(library(10)).unwrap();
    assert_eq!(a.tracks().unwrap(), b.tracks().unwrap());

    for _ in 0..25 {
        assert_eq!(a.advance(secs(1)).unwrap(), b.advance(secs(1)).unwrap());
    }
}

#[test]
fn handle_dispatches_intents() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("b.mp3"), b"not real").unwrap();

    let mut engine = seeded(10);
    assert_eq!(
        engine.handle(Intent::Current),
        Err(EngineError::NotInitialized)
    );

    let first = engine
        .handle(Intent::Initialize(dir.path().to_path_buf()))
        .unwrap();
    assert_eq!(engine.handle(Intent::Current).unwrap(), first);

    let second = engine.handle(Intent::Advance(secs(30))).unwrap();
    assert_ne!(second, first);

    let back = engine
        .handle(Intent::JumpTo(secs(2), first.clone()))
        .unwrap();
    assert_eq!(back, first);
}

#[test]
fn two_file_scenario_from_a_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("b.mp3"), b"not real").unwrap();

    for seed in 0..50 {
        let mut engine = seeded(seed);
        let first = engine.initialize(dir.path()).unwrap();
        assert_eq!(engine.tracks().unwrap().len(), 2);

        let second = engine.advance(secs(30)).unwrap();
        assert_ne!(second, first);

        let third = engine.advance(secs(30)).unwrap();
        assert_ne!(third, second);
    }
}

#[test]
fn initialize_on_empty_directory_then_valid_directory() {
    let empty = tempdir().unwrap();
    let full = tempdir().unwrap();
    fs::write(full.path().join("song.ogg"), b"not real").unwrap();

    let mut engine = seeded(11);
    assert_eq!(
        engine.initialize(empty.path()),
        Err(EngineError::EmptyLibrary(empty.path().to_path_buf()))
    );
    assert_eq!(engine.state(), EngineState::Uninitialized);

    let track = engine.initialize(full.path()).unwrap();
    assert_eq!(track.title(), "song");
    assert_eq!(engine.state(), EngineState::Ready);
}

#[test]
fn initialize_on_missing_directory_is_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone");
    let mut engine = seeded(12);
    assert_eq!(
        engine.initialize(&missing),
        Err(EngineError::NotFound(missing))
    );
    assert_eq!(engine.state(), EngineState::Uninitialized);
}

#[test]
fn reinitialize_replaces_the_whole_session() {
    let mut engine = seeded(13);
    engine.load(library(3)).unwrap();
    engine.advance(secs(1)).unwrap();
    assert_eq!(engine.history().len(), 1);

    let other = Library::new(
        "/other",
        vec![Track::new("/other/x.mp3", "X", None)],
    );
    let first = engine.load(other).unwrap();
    assert_eq!(first.path(), std::path::Path::new("/other/x.mp3"));
    assert!(engine.history().is_empty());
    assert_eq!(engine.library().unwrap().root(), std::path::Path::new("/other"));
}

#[test]
fn shared_engine_serializes_concurrent_advances() {
    let shared = SharedEngine::new(seeded(14));
    assert_eq!(shared.state(), EngineState::Uninitialized);
    assert_eq!(shared.current(), Err(EngineError::NotInitialized));
    shared.load(library(6)).unwrap();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let engine = shared.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    engine.advance(Duration::from_millis(10)).unwrap();
                    engine.current().unwrap();
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    assert_eq!(shared.history().len(), 100);
    assert_eq!(shared.tracks().unwrap().len(), 6);
    assert_eq!(shared.state(), EngineState::Ready);
}

#[test]
fn shared_engine_initialize_scans_outside_the_lock() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.flac"), b"not real").unwrap();

    let shared = SharedEngine::new(seeded(15));
    let first = shared
        .handle(Intent::Initialize(dir.path().to_path_buf()))
        .unwrap();
    assert_eq!(first.title(), "one");
    assert_eq!(shared.handle(Intent::Advance(secs(1))).unwrap(), first);
}
