use std::path::PathBuf;
use std::time::Duration;

/// One line of driver input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `next [secs]`: the current track ended or was skipped.
    Next(Duration),
    /// `jump <n> [secs]`: play entry `n` (1-based) of the last listing.
    Jump { entry: usize, elapsed: Duration },
    Now,
    List,
    Find(String),
    Order,
    History,
    Open(PathBuf),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  next [secs]        skip to the next track (secs = time played so far)
  jump <n> [secs]    play entry n of the last list/find output
  now                show the current track
  list               list the library
  find <text>        list tracks whose name contains text
  order              show the current play order
  history            show tracks played so far
  open <dir>         scan another directory and start over
  help               show this help
  quit               exit";

fn parse_elapsed(arg: Option<&str>) -> Result<Duration, String> {
    let Some(raw) = arg else {
        return Ok(Duration::ZERO);
    };
    let secs: f64 = raw
        .parse()
        .map_err(|_| format!("not a number of seconds: {raw}"))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("seconds must be >= 0: {raw}"))
}

/// Parse a line. Blank lines parse to `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let cmd = match word.to_ascii_lowercase().as_str() {
        "next" | "n" | "skip" => Command::Next(parse_elapsed(args.next())?),
        "jump" | "j" | "play" => {
            let raw = args.next().ok_or("usage: jump <n> [secs]")?;
            let entry: usize = raw
                .parse()
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| format!("not a list entry: {raw}"))?;
            Command::Jump {
                entry,
                elapsed: parse_elapsed(args.next())?,
            }
        }
        "now" => Command::Now,
        "list" | "ls" => Command::List,
        // The query is the raw remainder so inner spaces survive.
        "find" | "search" | "/" => Command::Find(rest.to_string()),
        "order" => Command::Order,
        "history" => Command::History,
        "open" => {
            if rest.is_empty() {
                return Err("usage: open <dir>".to_string());
            }
            Command::Open(PathBuf::from(rest))
        }
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Some(cmd))
}
