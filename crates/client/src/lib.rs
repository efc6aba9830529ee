//! GoPlayGo client.
//!
//! This crate contains the connection lifecycle and session-reconciliation
//! layer plus a thin terminal frontend. The server is authoritative for all
//! game rules; this client only sends commands and projects the snapshots it
//! receives.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;
