//! Domain layer for the sync daemon
//!
//! Configuration entities and the ports the daemon's collaborators implement.

pub mod models;
pub mod ports;

pub use ports::SyncEngine;
