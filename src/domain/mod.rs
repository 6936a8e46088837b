//! Domain aggregates exposed by the case-management service layer.

pub mod audit;
pub mod client;
pub mod client_log;
pub mod types;
