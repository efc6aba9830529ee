//! Platform abstraction ports.
//!
//! These traits isolate platform-specific operations (persistence, id
//! generation, timers) so the application layer stays testable with mock
//! implementations.

use std::{future::Future, pin::Pin};

/// Persistent key/value storage surviving client restarts.
pub trait StorageProvider: Clone + Send + Sync + 'static {
    /// Save a string value with the given key.
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found.
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key.
    fn remove(&self, key: &str);
}

/// Random id generation abstraction.
pub trait RandomProvider: Clone + 'static {
    /// Generate an alphanumeric id of the given length.
    fn alphanumeric_id(&self, len: usize) -> String;
}

/// Async sleep abstraction.
///
/// The reconnect loop takes this instead of calling the timer directly so
/// backoff behavior can be exercised without real delays.
pub trait SleepProvider: Clone + Send + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
}

/// Storage key constants.
///
/// The pairing invariant lives here in contract form: `GAME_ID` and
/// `GAME_MODE` are always written and cleared together.
pub mod storage_keys {
    pub const USER_ID: &str = "goplaygo_user_id";
    pub const GAME_ID: &str = "goplaygo_game_id";
    pub const GAME_MODE: &str = "goplaygo_game_mode";
}
