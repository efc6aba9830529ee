//! Application layer: session persistence and game-state projection.
//!
//! Everything here is transport-agnostic; commands go out through the
//! [`CommandBus`](crate::infrastructure::messaging::CommandBus) and events
//! come in as [`ClientEvent`](crate::ports::outbound::ClientEvent)s.

pub mod context;
pub mod services;
pub mod session_store;

pub use context::ClientContext;
pub use session_store::{SessionStore, USER_ID_LEN};

#[cfg(test)]
pub mod testing;
