use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Staff user who created a record, together with the creation time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuditStamp {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub timestamp: NaiveDateTime,
}
