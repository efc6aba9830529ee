//! Parses one line of terminal input into a command.

use goplaygo_shared::{GameMode, BOARD_SIZES};

pub const HELP_TEXT: &str = "\
Commands:
  create local|remote <size>   start a new game (size 9, 13 or 19)
  join <game-id>               join a remote game by id
  place <x> <y>                place a stone (0-based coordinates)
  pass                         pass the turn
  leave                        leave the current game
  help                         show this help
  quit                         exit";

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Create { mode: GameMode, size: u32 },
    Join { game_id: String },
    Place { x: u32, y: u32 },
    Pass,
    Leave,
    Help,
    Quit,
}

/// Parse a line of input. Errors are user-facing text.
pub fn parse_command(line: &str) -> Result<UiCommand, String> {
    let mut parts = line.split_whitespace();
    let verb = match parts.next() {
        Some(verb) => verb.to_ascii_lowercase(),
        None => return Err("Empty command, try 'help'".to_string()),
    };
    let args: Vec<&str> = parts.collect();

    match (verb.as_str(), args.as_slice()) {
        ("help", []) => Ok(UiCommand::Help),
        ("quit" | "exit", []) => Ok(UiCommand::Quit),
        ("pass", []) => Ok(UiCommand::Pass),
        ("leave", []) => Ok(UiCommand::Leave),
        ("join", [game_id]) => Ok(UiCommand::Join {
            game_id: (*game_id).to_string(),
        }),
        ("create", [mode, size]) => {
            let mode = match mode.to_ascii_lowercase().as_str() {
                "local" => GameMode::Local,
                "remote" => GameMode::Remote,
                other => return Err(format!("Unknown game mode '{other}', try local or remote")),
            };
            let size: u32 = size
                .parse()
                .map_err(|_| format!("Board size must be a number, got '{size}'"))?;
            if !BOARD_SIZES.contains(&size) {
                return Err(format!("Board size must be one of 9, 13 or 19, got {size}"));
            }
            Ok(UiCommand::Create { mode, size })
        }
        ("place", [x, y]) => {
            let x: u32 = x.parse().map_err(|_| format!("Bad x coordinate '{x}'"))?;
            let y: u32 = y.parse().map_err(|_| format!("Bad y coordinate '{y}'"))?;
            Ok(UiCommand::Place { x, y })
        }
        _ => Err(format!("Unrecognized command '{line}', try 'help'")),
    }
}
