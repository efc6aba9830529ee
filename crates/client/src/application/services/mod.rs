//! Application services reacting to the inbound event stream.
//!
//! - `session_service`: keeps the persisted session in step with the server
//!   and issues the rejoin on reconnect
//! - `game_state`: projects snapshots into the current view and requests
//!   fresh ones on update notices

pub mod game_state;
pub mod session_service;

pub use game_state::{GameStateProjector, CANT_GET_GAME_INFO};
pub use session_service::{SessionService, GAME_NOT_FOUND};
