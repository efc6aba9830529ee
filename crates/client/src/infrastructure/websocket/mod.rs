//! WebSocket client for the game-server connection.
//!
//! - `retry`: the linear-backoff retry policy driving reconnection
//! - `bridge`: the task that owns the socket and wires it to the buses

mod bridge;
mod retry;

pub use bridge::{create_connection, create_connection_with, Connection};
pub use retry::{BackoffState, RetryPolicy, BACKOFF_INCREMENT_SECS, MAX_BACKOFF_SECS};
