//! WebSocket message types for client-server communication.
//!
//! Outgoing commands serialize as `{"name": ..., "data": ...}` envelopes via
//! serde's adjacent tagging. Incoming messages are validated by
//! [`decode_server_message`], which is deliberately a two-step parse: first
//! the envelope (exact: only `name` and `data` keys), then the payload shape
//! selected by `name`. A payload that fails its shape is rejected outright,
//! never treated as a partial match.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{GameIdData, GameMode, LocalGameInfo, RemoteGameInfo};

// =============================================================================
// Client Messages (client → server)
// =============================================================================

/// Payload for `{mode}/createGame`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateGamePayload {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub size: u32,
}

/// Payload for the commands that reference an existing game
/// (`joinGame`, `rejoinGame`, `getGameInfo`, `leaveGame`, `pass`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameRefPayload {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "gameID")]
    pub game_id: String,
}

/// Payload for `{mode}/placeStone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceStonePayload {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "gameID")]
    pub game_id: String,
    pub coord: crate::types::Coord,
}

/// Commands sent from client to server, namespaced by mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "local/createGame")]
    LocalCreateGame(CreateGamePayload),
    #[serde(rename = "local/joinGame")]
    LocalJoinGame(GameRefPayload),
    #[serde(rename = "local/rejoinGame")]
    LocalRejoinGame(GameRefPayload),
    #[serde(rename = "local/getGameInfo")]
    LocalGetGameInfo(GameRefPayload),
    #[serde(rename = "local/leaveGame")]
    LocalLeaveGame(GameRefPayload),
    #[serde(rename = "local/pass")]
    LocalPass(GameRefPayload),
    #[serde(rename = "local/placeStone")]
    LocalPlaceStone(PlaceStonePayload),
    #[serde(rename = "remote/createGame")]
    RemoteCreateGame(CreateGamePayload),
    #[serde(rename = "remote/joinGame")]
    RemoteJoinGame(GameRefPayload),
    #[serde(rename = "remote/rejoinGame")]
    RemoteRejoinGame(GameRefPayload),
    #[serde(rename = "remote/getGameInfo")]
    RemoteGetGameInfo(GameRefPayload),
    #[serde(rename = "remote/leaveGame")]
    RemoteLeaveGame(GameRefPayload),
    #[serde(rename = "remote/pass")]
    RemotePass(GameRefPayload),
    #[serde(rename = "remote/placeStone")]
    RemotePlaceStone(PlaceStonePayload),
}

impl ClientMessage {
    /// The wire `name` of this command.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ClientMessage::LocalCreateGame(_) => "local/createGame",
            ClientMessage::LocalJoinGame(_) => "local/joinGame",
            ClientMessage::LocalRejoinGame(_) => "local/rejoinGame",
            ClientMessage::LocalGetGameInfo(_) => "local/getGameInfo",
            ClientMessage::LocalLeaveGame(_) => "local/leaveGame",
            ClientMessage::LocalPass(_) => "local/pass",
            ClientMessage::LocalPlaceStone(_) => "local/placeStone",
            ClientMessage::RemoteCreateGame(_) => "remote/createGame",
            ClientMessage::RemoteJoinGame(_) => "remote/joinGame",
            ClientMessage::RemoteRejoinGame(_) => "remote/rejoinGame",
            ClientMessage::RemoteGetGameInfo(_) => "remote/getGameInfo",
            ClientMessage::RemoteLeaveGame(_) => "remote/leaveGame",
            ClientMessage::RemotePass(_) => "remote/pass",
            ClientMessage::RemotePlaceStone(_) => "remote/placeStone",
        }
    }
}

// =============================================================================
// Error payload
// =============================================================================

/// The seven command kinds, shared by both mode namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    CreateGame,
    JoinGame,
    RejoinGame,
    GetGameInfo,
    LeaveGame,
    Pass,
    PlaceStone,
}

impl CommandKind {
    fn from_wire(s: &str) -> Option<Self> {
        Some(match s {
            "createGame" => CommandKind::CreateGame,
            "joinGame" => CommandKind::JoinGame,
            "rejoinGame" => CommandKind::RejoinGame,
            "getGameInfo" => CommandKind::GetGameInfo,
            "leaveGame" => CommandKind::LeaveGame,
            "pass" => CommandKind::Pass,
            "placeStone" => CommandKind::PlaceStone,
            _ => return None,
        })
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            CommandKind::CreateGame => "createGame",
            CommandKind::JoinGame => "joinGame",
            CommandKind::RejoinGame => "rejoinGame",
            CommandKind::GetGameInfo => "getGameInfo",
            CommandKind::LeaveGame => "leaveGame",
            CommandKind::Pass => "pass",
            CommandKind::PlaceStone => "placeStone",
        }
    }
}

/// A mode-qualified command name, as carried by error responses
/// (e.g. `remote/rejoinGame`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTag {
    pub mode: GameMode,
    pub command: CommandKind,
}

impl CommandTag {
    pub fn new(mode: GameMode, command: CommandKind) -> Self {
        Self { mode, command }
    }

    fn parse(s: &str) -> Option<Self> {
        let (prefix, command) = s.split_once('/')?;
        let mode = match prefix {
            "local" => GameMode::Local,
            "remote" => GameMode::Remote,
            _ => return None,
        };
        Some(Self {
            mode,
            command: CommandKind::from_wire(command)?,
        })
    }
}

impl std::fmt::Display for CommandTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.mode.prefix(), self.command.wire_name())
    }
}

/// Payload of the mode-agnostic `error` message.
///
/// `400`-class errors carry human-readable text; command-tagged errors carry
/// only the failing command name and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorData {
    BadRequest { message: String },
    CommandFailed(CommandTag),
}

// Raw wire shape of an error payload, validated further in `decode_error_data`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawErrorData {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Message")]
    message: Option<String>,
}

fn decode_error_data(data: Value) -> Result<ErrorData, DecodeError> {
    let raw: RawErrorData = serde_json::from_value(data).map_err(|source| {
        DecodeError::Payload {
            name: "error".to_string(),
            source,
        }
    })?;

    if raw.kind == "400" {
        let message = raw.message.ok_or_else(|| DecodeError::ErrorShape {
            detail: "400 error is missing its Message field".to_string(),
        })?;
        return Ok(ErrorData::BadRequest { message });
    }

    if raw.message.is_some() {
        return Err(DecodeError::ErrorShape {
            detail: format!("error type {:?} must not carry a Message", raw.kind),
        });
    }
    let tag = CommandTag::parse(&raw.kind).ok_or_else(|| DecodeError::ErrorShape {
        detail: format!("unrecognized error type {:?}", raw.kind),
    })?;
    Ok(ErrorData::CommandFailed(tag))
}

// =============================================================================
// Server Messages (server → client)
// =============================================================================

/// Validated messages from the server, one variant per wire `name`.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    LocalGameJoined(GameIdData),
    RemoteGameJoined(GameIdData),
    LocalGameInfo(Box<LocalGameInfo>),
    RemoteGameInfo(Box<RemoteGameInfo>),
    /// Poll trigger: game state changed, fetch a fresh snapshot.
    LocalUpdate,
    RemoteUpdate,
    LocalGameLeft,
    RemoteGameLeft,
    Error(ErrorData),
}

/// Failure produced when an inbound payload does not exactly match any
/// known `name` → shape pair.
///
/// A decode failure is fatal to that message: the payload is dropped, never
/// partially applied. It indicates a protocol mismatch between client and
/// server, not a recoverable runtime condition.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed message envelope: {0}")]
    Envelope(#[from] serde_json::Error),
    #[error("unrecognized message name {0:?}")]
    UnknownName(String),
    #[error("invalid payload for {name:?}: {source}")]
    Payload {
        name: String,
        source: serde_json::Error,
    },
    #[error("expected null data for {name:?}")]
    ExpectedNull { name: String },
    #[error("invalid error payload: {detail}")]
    ErrorShape { detail: String },
}

// Wire envelope. `deny_unknown_fields` makes the envelope itself exact;
// `data` has no default so a missing key is rejected too.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    name: String,
    data: Value,
}

fn payload<T: serde::de::DeserializeOwned>(name: &str, data: Value) -> Result<T, DecodeError> {
    serde_json::from_value(data).map_err(|source| DecodeError::Payload {
        name: name.to_string(),
        source,
    })
}

fn expect_null(name: &str, data: Value) -> Result<(), DecodeError> {
    if data.is_null() {
        Ok(())
    } else {
        Err(DecodeError::ExpectedNull {
            name: name.to_string(),
        })
    }
}

/// Validate one raw wire message against the closed message set.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, DecodeError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    let Envelope { name, data } = envelope;

    let msg = match name.as_str() {
        "local/gameJoined" => ServerMessage::LocalGameJoined(payload(&name, data)?),
        "remote/gameJoined" => ServerMessage::RemoteGameJoined(payload(&name, data)?),
        "local/gameInfo" => ServerMessage::LocalGameInfo(Box::new(payload(&name, data)?)),
        "remote/gameInfo" => ServerMessage::RemoteGameInfo(Box::new(payload(&name, data)?)),
        "local/update" => {
            expect_null(&name, data)?;
            ServerMessage::LocalUpdate
        }
        "remote/update" => {
            expect_null(&name, data)?;
            ServerMessage::RemoteUpdate
        }
        "local/gameLeft" => {
            expect_null(&name, data)?;
            ServerMessage::LocalGameLeft
        }
        "remote/gameLeft" => {
            expect_null(&name, data)?;
            ServerMessage::RemoteGameLeft
        }
        "error" => ServerMessage::Error(decode_error_data(data)?),
        _ => return Err(DecodeError::UnknownName(name)),
    };
    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, GameMode};

    fn remote_game_info_json() -> String {
        r#"{
          "name": "remote/gameInfo",
          "data": {
            "Size": 9,
            "Turn": 4,
            "PlayerTurn": true,
            "OpponentID": "xK3f9",
            "PlayerColor": "BLACK",
            "State": "PLAYING",
            "ScoreData": {"Winner": "BLACK", "PointDifference": 0},
            "AvailableSpaces": [{"X": 0, "Y": 0}, {"X": 1, "Y": 0}],
            "Spaces": {
              "BLACK": [{"X": 2, "Y": 2}],
              "WHITE": [{"X": 6, "Y": 6}]
            },
            "LastCoord": {"X": 6, "Y": 6}
          }
        }"#
        .to_string()
    }

    #[test]
    fn decodes_remote_game_info() {
        let msg = decode_server_message(&remote_game_info_json()).expect("decode remote/gameInfo");
        match msg {
            ServerMessage::RemoteGameInfo(info) => {
                assert_eq!(info.size, 9);
                assert_eq!(info.turn, 4);
                assert!(info.player_turn);
                assert_eq!(info.opponent_id, "xK3f9");
                assert_eq!(info.available_spaces.len(), 2);
                assert_eq!(info.spaces.white, vec![Coord::new(6, 6)]);
                assert_eq!(info.last_coord, Coord::new(6, 6));
                assert!(!info.awaiting_opponent());
            }
            other => panic!("unexpected message variant: {:?}", other),
        }
    }

    #[test]
    fn decodes_local_game_info() {
        let json = r#"{
          "name": "local/gameInfo",
          "data": {
            "Size": 13,
            "Turn": 1,
            "CurrentTurnColor": "BLACK",
            "State": "PLAYING",
            "ScoreData": {"Winner": "BLACK", "PointDifference": 0},
            "AvailableSpaces": [],
            "Spaces": {"BLACK": [], "WHITE": []},
            "LastCoord": {"X": 0, "Y": 0}
          }
        }"#;
        let msg = decode_server_message(json).expect("decode local/gameInfo");
        match msg {
            ServerMessage::LocalGameInfo(info) => {
                assert_eq!(info.size, 13);
                assert_eq!(info.current_turn_color, crate::types::StoneColor::Black);
            }
            other => panic!("unexpected message variant: {:?}", other),
        }
    }

    #[test]
    fn decodes_game_joined_and_left() {
        let msg = decode_server_message(r#"{"name":"remote/gameJoined","data":{"GameID":"g9"}}"#)
            .expect("decode gameJoined");
        match msg {
            ServerMessage::RemoteGameJoined(data) => assert_eq!(data.game_id, "g9"),
            other => panic!("unexpected message variant: {:?}", other),
        }

        let msg = decode_server_message(r#"{"name":"local/gameLeft","data":null}"#)
            .expect("decode gameLeft");
        assert!(matches!(msg, ServerMessage::LocalGameLeft));
    }

    #[test]
    fn decodes_update_poll_trigger() {
        let msg = decode_server_message(r#"{"name":"local/update","data":null}"#)
            .expect("decode update");
        assert!(matches!(msg, ServerMessage::LocalUpdate));

        // update must not carry data
        let err = decode_server_message(r#"{"name":"local/update","data":{"Turn":3}}"#)
            .expect_err("update with data must be rejected");
        assert!(matches!(err, DecodeError::ExpectedNull { .. }));
    }

    #[test]
    fn decodes_400_error_with_message() {
        let msg = decode_server_message(
            r#"{"name":"error","data":{"Type":"400","Message":"Unable to play move"}}"#,
        )
        .expect("decode 400 error");
        match msg {
            ServerMessage::Error(ErrorData::BadRequest { message }) => {
                assert_eq!(message, "Unable to play move");
            }
            other => panic!("unexpected message variant: {:?}", other),
        }
    }

    #[test]
    fn decodes_command_tagged_error() {
        let msg = decode_server_message(r#"{"name":"error","data":{"Type":"remote/rejoinGame"}}"#)
            .expect("decode rejoin error");
        match msg {
            ServerMessage::Error(ErrorData::CommandFailed(tag)) => {
                assert_eq!(tag.mode, GameMode::Remote);
                assert_eq!(tag.command, CommandKind::RejoinGame);
            }
            other => panic!("unexpected message variant: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_name() {
        let err = decode_server_message(r#"{"name":"message","data":"Message received!"}"#)
            .expect_err("unknown name must be rejected");
        assert!(matches!(err, DecodeError::UnknownName(name) if name == "message"));
    }

    #[test]
    fn rejects_extra_envelope_field() {
        let err =
            decode_server_message(r#"{"name":"local/update","data":null,"extra":1}"#)
                .expect_err("extra envelope field must be rejected");
        assert!(matches!(err, DecodeError::Envelope(_)));
    }

    #[test]
    fn rejects_missing_data_key() {
        let err = decode_server_message(r#"{"name":"local/update"}"#)
            .expect_err("missing data key must be rejected");
        assert!(matches!(err, DecodeError::Envelope(_)));
    }

    #[test]
    fn rejects_extra_payload_field() {
        let err = decode_server_message(
            r#"{"name":"remote/gameJoined","data":{"GameID":"g9","Bonus":true}}"#,
        )
        .expect_err("extra payload field must be rejected");
        assert!(matches!(err, DecodeError::Payload { name, .. } if name == "remote/gameJoined"));
    }

    #[test]
    fn rejects_mistyped_payload_field() {
        let err = decode_server_message(r#"{"name":"remote/gameJoined","data":{"GameID":42}}"#)
            .expect_err("mistyped field must be rejected");
        assert!(matches!(err, DecodeError::Payload { .. }));
    }

    #[test]
    fn rejects_mode_mismatched_snapshot() {
        // A local snapshot shape arriving under the remote name must fail:
        // no partial matching across the tagged union.
        let json = r#"{
          "name": "remote/gameInfo",
          "data": {
            "Size": 9,
            "Turn": 1,
            "CurrentTurnColor": "BLACK",
            "State": "PLAYING",
            "ScoreData": {"Winner": "BLACK", "PointDifference": 0},
            "AvailableSpaces": [],
            "Spaces": {"BLACK": [], "WHITE": []},
            "LastCoord": {"X": 0, "Y": 0}
          }
        }"#;
        let err = decode_server_message(json).expect_err("mode mismatch must be rejected");
        assert!(matches!(err, DecodeError::Payload { .. }));
    }

    #[test]
    fn rejects_error_with_unknown_type_tag() {
        let err = decode_server_message(r#"{"name":"error","data":{"Type":"teapot"}}"#)
            .expect_err("unknown error type must be rejected");
        assert!(matches!(err, DecodeError::ErrorShape { .. }));
    }

    #[test]
    fn rejects_400_error_without_message() {
        let err = decode_server_message(r#"{"name":"error","data":{"Type":"400"}}"#)
            .expect_err("400 without Message must be rejected");
        assert!(matches!(err, DecodeError::ErrorShape { .. }));
    }

    #[test]
    fn rejects_command_error_with_message() {
        let err = decode_server_message(
            r#"{"name":"error","data":{"Type":"local/getGameInfo","Message":"nope"}}"#,
        )
        .expect_err("command error carrying a Message must be rejected");
        assert!(matches!(err, DecodeError::ErrorShape { .. }));
    }

    #[test]
    fn client_message_serializes_as_envelope() {
        let msg = ClientMessage::RemoteRejoinGame(GameRefPayload {
            user_id: "abc12".to_string(),
            game_id: "g9".to_string(),
        });
        let json = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "remote/rejoinGame",
                "data": {"userID": "abc12", "gameID": "g9"}
            })
        );
        assert_eq!(msg.wire_name(), "remote/rejoinGame");
    }

    #[test]
    fn place_stone_serializes_coord() {
        let msg = ClientMessage::LocalPlaceStone(PlaceStonePayload {
            user_id: "u".to_string(),
            game_id: "g".to_string(),
            coord: Coord::new(3, 4),
        });
        let json = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "local/placeStone",
                "data": {"userID": "u", "gameID": "g", "coord": {"X": 3, "Y": 4}}
            })
        );
    }
}
