//! WebSocket bridge task.
//!
//! A single spawned task owns the socket for the whole client lifetime. It
//! runs the reconnect loop, forwards queued commands onto the wire, decodes
//! inbound frames and dispatches the resulting events. All connection state
//! transitions happen here; everything else observes them through the cell.
//!
//! While no socket is open the command queue is still drained: queued
//! commands are dropped with a log line rather than replayed after
//! reconnect, so a command is never delivered against a session the server
//! no longer recognizes.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use goplaygo_shared::decode_server_message;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::infrastructure::message_translator;
use crate::infrastructure::messaging::{
    CommandBus, ConnectionHandle, ConnectionStateCell, ConnectionStateObserver, EventBus,
    COMMAND_QUEUE_DEPTH,
};
use crate::infrastructure::platform::DesktopSleepProvider;
use crate::ports::outbound::{ClientEvent, SleepProvider};

use super::retry::{BackoffState, RetryPolicy};

/// Handles returned by [`create_connection`].
pub struct Connection {
    pub command_bus: CommandBus,
    pub event_bus: EventBus,
    pub handle: ConnectionHandle,
    pub state_observer: ConnectionStateObserver,
    start_tx: Option<oneshot::Sender<()>>,
}

impl Connection {
    /// Release the bridge to make its first connection attempt.
    ///
    /// The bus delivers events only to subscribers registered at dispatch
    /// time, so the bridge holds off connecting until this fires. Register
    /// every subscriber first, then call `start()`; that ordering is what
    /// guarantees the first `Connected` event is seen.
    pub fn start(&mut self) {
        if let Some(tx) = self.start_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Create a WebSocket connection to the game server.
///
/// Spawns the bridge task, which waits for [`Connection::start`] before the
/// first connection attempt and then keeps reconnecting in the background
/// until `handle.disconnect()` is called.
pub fn create_connection(url: &str) -> Connection {
    create_connection_with(url, RetryPolicy::default(), DesktopSleepProvider)
}

/// Create a connection with an explicit retry policy and sleep provider.
pub fn create_connection_with<S: SleepProvider>(
    url: &str,
    policy: RetryPolicy,
    sleep: S,
) -> Connection {
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let (disconnect_tx, disconnect_rx) = oneshot::channel();
    let (start_tx, start_rx) = oneshot::channel();
    let cell = Arc::new(ConnectionStateCell::default());

    let command_bus = CommandBus::new(cmd_tx);
    let event_bus = EventBus::new();
    let state_observer = ConnectionStateObserver::new(Arc::clone(&cell));
    let handle = ConnectionHandle::new(Arc::clone(&cell), disconnect_tx);

    tokio::spawn(bridge_task(
        url.to_string(),
        policy,
        sleep,
        cmd_rx,
        start_rx,
        disconnect_rx,
        event_bus.clone(),
        cell,
    ));

    Connection {
        command_bus,
        event_bus,
        handle,
        state_observer,
        start_tx: Some(start_tx),
    }
}

#[allow(clippy::too_many_arguments)]
async fn bridge_task<S: SleepProvider>(
    url: String,
    policy: RetryPolicy,
    sleep: S,
    mut cmd_rx: mpsc::Receiver<goplaygo_shared::ClientMessage>,
    start_rx: oneshot::Receiver<()>,
    disconnect_rx: oneshot::Receiver<()>,
    event_bus: EventBus,
    cell: Arc<ConnectionStateCell>,
) {
    let mut backoff = BackoffState::new(policy);
    // Resolves on disconnect() and on handle drop alike; either way the
    // bridge shuts down. Every branch that sees it complete returns, so the
    // future is never polled again afterwards.
    let mut shutdown = Box::pin(async move {
        let _ = disconnect_rx.await;
    });

    // Do not touch the network until the caller has finished wiring up
    // event subscribers; a Connected event dispatched before then would be
    // lost and the startup rejoin with it.
    tokio::select! {
        _ = start_rx => {}
        _ = &mut shutdown => {
            cell.set_disconnected(0);
            return;
        }
    }

    loop {
        // Wait out the current backoff delay, still draining the command
        // queue so senders never observe backpressure from a dead socket.
        let delay = backoff.delay_secs();
        if delay > 0 {
            tracing::info!("Waiting {} seconds before connecting...", delay);
            let mut timer = sleep.sleep_ms(delay * 1000);
            loop {
                tokio::select! {
                    _ = &mut timer => break,
                    _ = &mut shutdown => {
                        cell.set_disconnected(0);
                        return;
                    }
                    maybe = cmd_rx.recv() => match maybe {
                        Some(msg) => {
                            tracing::warn!(command = msg.wire_name(), "Dropping command, not connected");
                        }
                        None => return,
                    }
                }
            }
        }

        tracing::info!("Connecting to {}...", url);
        cell.set_connecting();

        let connected = tokio::select! {
            result = connect_async(&url) => result,
            _ = &mut shutdown => {
                cell.set_disconnected(0);
                return;
            }
        };

        let (mut write, mut read) = match connected {
            Ok((stream, _)) => stream.split(),
            Err(e) => {
                tracing::warn!("Connection attempt failed: {}", e);
                let delay = backoff.on_failure();
                cell.set_disconnected(delay);
                event_bus
                    .dispatch(ClientEvent::Disconnected {
                        backoff_secs: delay,
                    })
                    .await;
                continue;
            }
        };

        tracing::info!("Connected!");
        backoff.reset();
        cell.set_connected();
        event_bus.dispatch(ClientEvent::Connected).await;

        let mut open = true;
        while open {
            tokio::select! {
                _ = &mut shutdown => {
                    let _ = write.send(Message::Close(None)).await;
                    cell.set_disconnected(0);
                    return;
                }
                maybe = cmd_rx.recv() => match maybe {
                    Some(msg) => match serde_json::to_string(&msg) {
                        Ok(json) => {
                            tracing::debug!(command = msg.wire_name(), "Sending command");
                            if let Err(e) = write.send(Message::Text(json)).await {
                                tracing::error!("Failed to send command: {}", e);
                                open = false;
                            }
                        }
                        Err(e) => {
                            tracing::error!("Failed to serialize command: {}", e);
                        }
                    },
                    None => return,
                },
                inbound = read.next() => match inbound {
                    Some(Ok(Message::Text(text))) => match decode_server_message(&text) {
                        Ok(msg) => {
                            event_bus.dispatch(message_translator::translate(msg)).await;
                        }
                        Err(e) => {
                            tracing::warn!("Rejected inbound message: {}", e);
                        }
                    },
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Disconnected!");
                        open = false;
                    }
                    // Pings and pongs are handled by the library; binary
                    // frames are not part of the protocol.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error: {}", e);
                        open = false;
                    }
                }
            }
        }

        let delay = backoff.on_failure();
        cell.set_disconnected(delay);
        event_bus
            .dispatch(ClientEvent::Disconnected {
                backoff_secs: delay,
            })
            .await;
    }
}
