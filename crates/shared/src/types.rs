//! Game-state vocabulary types shared by both message directions.
//!
//! Field names are serialized in the server's Go-struct casing (`X`, `Y`,
//! `GameID`, `PointDifference`, ...) so these types match the wire exactly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Board sizes the lobby offers.
pub const BOARD_SIZES: [u32; 3] = [9, 13, 19];

/// Sentinel opponent id while a remote game is waiting for a second player.
pub const NO_OPPONENT: &str = "NONE";

/// Which seat-control mode a game was created in.
///
/// `Local` games drive both seats from one client; `Remote` games have one
/// seat per client. The mode selects the message namespace (`local/*` vs
/// `remote/*`) and the snapshot shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "LOCAL")]
    Local,
    #[serde(rename = "REMOTE")]
    Remote,
}

impl GameMode {
    /// Persisted-store spelling (`"LOCAL"` / `"REMOTE"`).
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Local => "LOCAL",
            GameMode::Remote => "REMOTE",
        }
    }

    /// Wire namespace prefix (`"local"` / `"remote"`).
    pub fn prefix(self) -> &'static str {
        match self {
            GameMode::Local => "local",
            GameMode::Remote => "remote",
        }
    }
}

impl FromStr for GameMode {
    type Err = UnknownGameMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(GameMode::Local),
            "REMOTE" => Ok(GameMode::Remote),
            other => Err(UnknownGameMode(other.to_string())),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized persisted game-mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized game mode: {0:?}")]
pub struct UnknownGameMode(pub String);

/// Stone color. Black always belongs to the player who created the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoneColor {
    #[serde(rename = "BLACK")]
    Black,
    #[serde(rename = "WHITE")]
    White,
}

impl fmt::Display for StoneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoneColor::Black => f.write_str("Black"),
            StoneColor::White => f.write_str("White"),
        }
    }
}

/// A board intersection. `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coord {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "Y")]
    pub y: u32,
}

impl Coord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Final score, meaningful once a game has concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreData {
    #[serde(rename = "Winner")]
    pub winner: StoneColor,
    #[serde(rename = "PointDifference")]
    pub point_difference: u32,
}

/// Per-color stone placements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spaces {
    #[serde(rename = "BLACK")]
    pub black: Vec<Coord>,
    #[serde(rename = "WHITE")]
    pub white: Vec<Coord>,
}

/// Lifecycle of a remote (one seat per client) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteGameState {
    #[serde(rename = "WAITING_FOR_OPPONENT")]
    WaitingForOpponent,
    #[serde(rename = "PLAYING")]
    Playing,
    #[serde(rename = "GAME_OVER_FORFEIT")]
    GameOverForfeit,
    #[serde(rename = "GAME_OVER_PASSED")]
    GameOverPassed,
}

impl RemoteGameState {
    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            RemoteGameState::GameOverForfeit | RemoteGameState::GameOverPassed
        )
    }
}

/// Lifecycle of a local (both seats on one client) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalGameState {
    #[serde(rename = "PLAYING")]
    Playing,
    #[serde(rename = "GAME_OVER")]
    GameOver,
}

impl LocalGameState {
    pub fn is_game_over(self) -> bool {
        matches!(self, LocalGameState::GameOver)
    }
}

/// Full game-state snapshot for a remote game, as sent by `remote/gameInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteGameInfo {
    #[serde(rename = "Size")]
    pub size: u32,
    #[serde(rename = "Turn")]
    pub turn: u32,
    #[serde(rename = "PlayerTurn")]
    pub player_turn: bool,
    #[serde(rename = "OpponentID")]
    pub opponent_id: String,
    #[serde(rename = "PlayerColor")]
    pub player_color: StoneColor,
    #[serde(rename = "State")]
    pub state: RemoteGameState,
    #[serde(rename = "ScoreData")]
    pub score_data: ScoreData,
    #[serde(rename = "AvailableSpaces")]
    pub available_spaces: Vec<Coord>,
    #[serde(rename = "Spaces")]
    pub spaces: Spaces,
    #[serde(rename = "LastCoord")]
    pub last_coord: Coord,
}

impl RemoteGameInfo {
    /// True while no second player has joined yet.
    pub fn awaiting_opponent(&self) -> bool {
        self.opponent_id == NO_OPPONENT
    }
}

/// Full game-state snapshot for a local game, as sent by `local/gameInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalGameInfo {
    #[serde(rename = "Size")]
    pub size: u32,
    #[serde(rename = "Turn")]
    pub turn: u32,
    #[serde(rename = "CurrentTurnColor")]
    pub current_turn_color: StoneColor,
    #[serde(rename = "State")]
    pub state: LocalGameState,
    #[serde(rename = "ScoreData")]
    pub score_data: ScoreData,
    #[serde(rename = "AvailableSpaces")]
    pub available_spaces: Vec<Coord>,
    #[serde(rename = "Spaces")]
    pub spaces: Spaces,
    #[serde(rename = "LastCoord")]
    pub last_coord: Coord,
}

/// Payload of `{mode}/gameJoined`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameIdData {
    #[serde(rename = "GameID")]
    pub game_id: String,
}

/// Mode-tagged view of the current game, owned by the state projector and
/// replaced wholesale on every snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum GameView {
    Local(LocalGameInfo),
    Remote(RemoteGameInfo),
}

impl GameView {
    pub fn mode(&self) -> GameMode {
        match self {
            GameView::Local(_) => GameMode::Local,
            GameView::Remote(_) => GameMode::Remote,
        }
    }

    pub fn size(&self) -> u32 {
        match self {
            GameView::Local(info) => info.size,
            GameView::Remote(info) => info.size,
        }
    }

    pub fn is_game_over(&self) -> bool {
        match self {
            GameView::Local(info) => info.state.is_game_over(),
            GameView::Remote(info) => info.state.is_game_over(),
        }
    }

    pub fn spaces(&self) -> &Spaces {
        match self {
            GameView::Local(info) => &info.spaces,
            GameView::Remote(info) => &info.spaces,
        }
    }

    pub fn available_spaces(&self) -> &[Coord] {
        match self {
            GameView::Local(info) => &info.available_spaces,
            GameView::Remote(info) => &info.available_spaces,
        }
    }

    pub fn last_coord(&self) -> Coord {
        match self {
            GameView::Local(info) => info.last_coord,
            GameView::Remote(info) => info.last_coord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_mode_roundtrips_through_persisted_spelling() {
        for mode in [GameMode::Local, GameMode::Remote] {
            let parsed: GameMode = mode.as_str().parse().expect("parse persisted mode");
            assert_eq!(parsed, mode);
        }
        assert!("local".parse::<GameMode>().is_err());
    }

    #[test]
    fn remote_state_game_over() {
        assert!(RemoteGameState::GameOverForfeit.is_game_over());
        assert!(RemoteGameState::GameOverPassed.is_game_over());
        assert!(!RemoteGameState::Playing.is_game_over());
        assert!(!RemoteGameState::WaitingForOpponent.is_game_over());
    }

    #[test]
    fn coord_serializes_with_go_casing() {
        let json = serde_json::to_value(Coord::new(3, 4)).expect("serialize coord");
        assert_eq!(json, serde_json::json!({"X": 3, "Y": 4}));
    }
}
