use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use riffle::{Intent, ShuffleEngine};

mod command;
mod logging;
mod repl;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_problem) = settings::load_settings();
    logging::init(&settings.log.filter);
    if let Some(problem) = settings_problem {
        tracing::warn!("{problem}");
    }

    let arg = env::args().nth(1);
    if arg.as_deref() == Some("--print-config") {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let dir = match arg {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from("Music")),
    };

    let mut engine = ShuffleEngine::new(&settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A bad directory is not fatal: `open <dir>` can start a session later.
    match engine.handle(Intent::Initialize(dir)) {
        Ok(track) => writeln!(out, "Now Playing: {track}")?,
        Err(e) => writeln!(out, "error: {e}")?,
    }
    writeln!(out, "type `help` for commands")?;
    out.flush()?;

    let mut state = repl::ReplState::default();
    repl::run(io::stdin().lock(), &mut out, &mut engine, &mut state)?;
    Ok(())
}
