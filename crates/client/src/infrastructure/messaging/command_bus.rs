//! Command bus for sending messages to the game server.
//!
//! Commands are at-most-once and fire-and-forget: once queued there is no
//! acknowledgment channel other than the server's next message, and a command
//! issued while no connection is open is logged and dropped rather than
//! surfaced as an error. Callers gate user actions on connection status.

use goplaygo_shared::ClientMessage;
use tokio::sync::mpsc;

/// Depth of the outgoing command queue.
pub const COMMAND_QUEUE_DEPTH: usize = 32;

/// Cloneable sender half wired to the WebSocket bridge task.
#[derive(Clone)]
pub struct CommandBus {
    tx: mpsc::Sender<ClientMessage>,
}

impl CommandBus {
    pub fn new(tx: mpsc::Sender<ClientMessage>) -> Self {
        Self { tx }
    }

    /// Send a fire-and-forget command.
    ///
    /// Never errors toward the caller: a full queue or a gone bridge means
    /// the command is dropped with a log line.
    pub fn send(&self, message: ClientMessage) {
        let name = message.wire_name();
        if let Err(e) = self.tx.try_send(message) {
            tracing::warn!(command = name, "Dropping command, no connection: {}", e);
        }
    }
}
