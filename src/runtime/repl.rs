use std::io::{self, BufRead, Write};

use riffle::{EngineError, Intent, ShuffleEngine, Track, filter};

use super::command::{self, Command, HELP};

/// State kept by the command loop across lines.
#[derive(Default)]
pub struct ReplState {
    /// Rows of the last `list`/`find` output; `jump n` picks from these.
    pub listing: Vec<Track>,
}

fn now_playing(out: &mut impl Write, track: &Track) -> io::Result<()> {
    writeln!(out, "Now Playing: {track}")
}

fn print_rows(out: &mut impl Write, tracks: &[Track]) -> io::Result<()> {
    for (i, t) in tracks.iter().enumerate() {
        writeln!(out, "{:>4}  {t}", i + 1)?;
    }
    Ok(())
}

fn report(out: &mut impl Write, result: Result<Track, EngineError>) -> io::Result<()> {
    match result {
        Ok(track) => now_playing(out, &track),
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn list(
    out: &mut impl Write,
    engine: &ShuffleEngine,
    state: &mut ReplState,
    query: &str,
) -> io::Result<()> {
    let Some(library) = engine.library() else {
        return writeln!(out, "error: {}", EngineError::NotInitialized);
    };
    state.listing = filter(library.tracks(), query);
    if state.listing.is_empty() {
        writeln!(out, "no matches")?;
    }
    print_rows(out, &state.listing)
}

/// Read commands from `input` until EOF or `quit`, driving `engine`.
pub fn run(
    input: impl BufRead,
    out: &mut impl Write,
    engine: &mut ShuffleEngine,
    state: &mut ReplState,
) -> io::Result<()> {
    for line in input.lines() {
        let cmd = match command::parse(&line?) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "error: {msg}")?;
                continue;
            }
        };

        match cmd {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Next(elapsed) => report(out, engine.handle(Intent::Advance(elapsed)))?,
            Command::Now => report(out, engine.handle(Intent::Current))?,
            Command::Jump { entry, elapsed } => match state.listing.get(entry - 1) {
                Some(track) => report(out, engine.handle(Intent::JumpTo(elapsed, track.clone())))?,
                None => writeln!(
                    out,
                    "error: no entry {entry} (the last listing had {})",
                    state.listing.len()
                )?,
            },
            Command::List => list(out, engine, state, "")?,
            Command::Find(query) => list(out, engine, state, &query)?,
            Command::Order => match engine.tracks() {
                Ok(order) => {
                    state.listing = order;
                    print_rows(out, &state.listing)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::History => {
                for entry in engine.history() {
                    writeln!(out, "{:>8.1}s  {}", entry.elapsed.as_secs_f64(), entry.track)?;
                }
            }
            Command::Open(dir) => {
                let result = engine.handle(Intent::Initialize(dir));
                if result.is_ok() {
                    state.listing.clear();
                }
                report(out, result)?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
