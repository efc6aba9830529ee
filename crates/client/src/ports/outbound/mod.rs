pub mod client_events;
pub mod platform;

pub use client_events::ClientEvent;
pub use platform::{storage_keys, RandomProvider, SleepProvider, StorageProvider};
