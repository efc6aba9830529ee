//! Connection lifecycle state.
//!
//! Exactly one transport socket is associated with `Connecting`/`Connected`;
//! `Disconnected` carries the backoff delay before the next attempt. The
//! bridge task is the only writer; observers read through atomics.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::oneshot;

/// Connection state for the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected; waiting out the current backoff delay.
    Disconnected,
    /// Attempting to establish a connection.
    Connecting,
    /// Successfully connected.
    Connected,
}

impl ConnectionState {
    /// Convert to u8 for atomic storage.
    pub fn to_u8(self) -> u8 {
        match self {
            ConnectionState::Disconnected => 0,
            ConnectionState::Connecting => 1,
            ConnectionState::Connected => 2,
        }
    }

    /// Convert from u8 (atomic storage).
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Connected,
            _ => ConnectionState::Disconnected,
        }
    }
}

/// Snapshot of the connection state plus the current backoff delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub state: ConnectionState,
    /// Seconds to wait before the next attempt; 0 unless `Disconnected`.
    pub backoff_secs: u64,
}

/// Shared cell the bridge writes and observers read.
#[derive(Debug, Default)]
pub struct ConnectionStateCell {
    state: AtomicU8,
    backoff_secs: AtomicU64,
}

impl ConnectionStateCell {
    pub fn set_connecting(&self) {
        self.backoff_secs.store(0, Ordering::SeqCst);
        self.state
            .store(ConnectionState::Connecting.to_u8(), Ordering::SeqCst);
    }

    pub fn set_connected(&self) {
        self.backoff_secs.store(0, Ordering::SeqCst);
        self.state
            .store(ConnectionState::Connected.to_u8(), Ordering::SeqCst);
    }

    pub fn set_disconnected(&self, backoff_secs: u64) {
        self.backoff_secs.store(backoff_secs, Ordering::SeqCst);
        self.state
            .store(ConnectionState::Disconnected.to_u8(), Ordering::SeqCst);
    }

    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus {
            state: ConnectionState::from_u8(self.state.load(Ordering::SeqCst)),
            backoff_secs: self.backoff_secs.load(Ordering::SeqCst),
        }
    }
}

/// Handle to manage connection lifecycle.
///
/// The bridge shuts down when the disconnect signal fires or its sender is
/// dropped, so keep the handle alive for as long as the connection should
/// stay up.
pub struct ConnectionHandle {
    cell: Arc<ConnectionStateCell>,
    disconnect_tx: Option<oneshot::Sender<()>>,
}

impl ConnectionHandle {
    pub fn new(cell: Arc<ConnectionStateCell>, disconnect_tx: oneshot::Sender<()>) -> Self {
        Self {
            cell,
            disconnect_tx: Some(disconnect_tx),
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.cell.status()
    }

    pub fn is_connected(&self) -> bool {
        self.status().state == ConnectionState::Connected
    }

    /// Request disconnect. Consumes the handle; a closed connection cannot be
    /// reused.
    pub fn disconnect(mut self) {
        if let Some(tx) = self.disconnect_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn cell(&self) -> Arc<ConnectionStateCell> {
        Arc::clone(&self.cell)
    }
}

/// Observable connection state for the presentation layer.
#[derive(Clone)]
pub struct ConnectionStateObserver {
    cell: Arc<ConnectionStateCell>,
}

impl ConnectionStateObserver {
    pub fn new(cell: Arc<ConnectionStateCell>) -> Self {
        Self { cell }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.cell.status()
    }

    pub fn is_connected(&self) -> bool {
        self.status().state == ConnectionState::Connected
    }
}
