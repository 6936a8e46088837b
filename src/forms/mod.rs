//! Request parameter definitions backing the API routes.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;

pub mod client_list;

/// Every problem found in a request, reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub messages: Vec<String>,
    pub unknown_keys: Vec<String>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

impl From<String> for ValidationReport {
    fn from(message: String) -> Self {
        Self {
            messages: vec![message],
            unknown_keys: Vec::new(),
        }
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("invalid request: {0}")]
    InvalidQuery(ValidationReport),

    #[error("malformed query string: {0}")]
    Malformed(String),
}
