//! Database models shared across the case-management repository.

pub mod client;
pub mod client_log;
pub mod config;
pub mod user;
