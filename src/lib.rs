//! In-memory calendar event store with an HTTP facade.

pub mod config;
pub mod date;
pub mod event;
pub mod server;
pub mod storage;
