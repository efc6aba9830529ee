//! Platform provider implementations.

mod desktop;

pub use desktop::{DesktopRandomProvider, DesktopSleepProvider, DesktopStorageProvider};
