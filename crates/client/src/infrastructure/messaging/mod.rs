//! Messaging infrastructure between the application layer and the transport:
//! - `CommandBus`: send commands toward the socket (fire-and-forget)
//! - `EventBus`: receive validated events (push-based subscription)
//! - `ConnectionHandle` / `ConnectionStateObserver`: connection lifecycle
//!
//! The WebSocket bridge (in the websocket module) connects these to the
//! actual transport.

pub mod command_bus;
pub mod connection;
pub mod event_bus;

pub use command_bus::{CommandBus, COMMAND_QUEUE_DEPTH};
pub use connection::{
    ConnectionHandle, ConnectionState, ConnectionStateCell, ConnectionStateObserver,
    ConnectionStatus,
};
pub use event_bus::EventBus;
