use serde::{Deserialize, Serialize};

use crate::domain::audit::AuditStamp;
use crate::domain::types::{ClientId, ClientLogId};

/// Entry of the client activity log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientLog {
    pub id: ClientLogId,
    pub client_id: ClientId,
    pub title: String,
    pub description: Option<String>,
    pub log_type: String,
    pub created_by: AuditStamp,
}
