//! DTOs exposed by the case-management API endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::audit::AuditStamp;
use crate::domain::client::ClientListItem;
use crate::domain::client_log::ClientLog;
use crate::pagination::PageInfo;

/// Joins the present name parts with a single space.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    [first_name.trim(), last_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBy {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub timestamp: NaiveDateTime,
}

impl From<AuditStamp> for CreatedBy {
    fn from(stamp: AuditStamp) -> Self {
        Self {
            user_id: stamp.user_id.get(),
            full_name: full_name(&stamp.first_name, &stamp.last_name),
            first_name: stamp.first_name,
            last_name: stamp.last_name,
            timestamp: stamp.timestamp,
        }
    }
}

/// One entry of the client list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: i32,
    pub is_deleted: bool,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub birthday: Option<NaiveDate>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_by: CreatedBy,
}

impl From<ClientListItem> for ClientSummary {
    fn from(client: ClientListItem) -> Self {
        Self {
            id: client.id.get(),
            is_deleted: client.is_deleted,
            full_name: full_name(&client.first_name, &client.last_name),
            first_name: client.first_name,
            last_name: client.last_name,
            birthday: client.birthday,
            zip: client.zip,
            phone: client.phone,
            email: client.email,
            created_by: client.created_by.into(),
        }
    }
}

/// Body of a successful `GET /api/clients`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientsResponse {
    pub clients: Vec<ClientSummary>,
    pub pagination: PageInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientLogEntry {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub log_type: String,
    pub created_by: CreatedBy,
}

impl From<ClientLog> for ClientLogEntry {
    fn from(log: ClientLog) -> Self {
        Self {
            id: log.id.get(),
            title: log.title,
            description: log.description,
            log_type: log.log_type,
            created_by: log.created_by.into(),
        }
    }
}

/// Body of a successful `GET /api/clients/{client_id}/logs`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientLogsResponse {
    pub logs: Vec<ClientLogEntry>,
}

/// Body of every failed API call.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_keys: Vec<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            unknown_keys: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ClientId, UserId};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn full_name_skips_missing_parts() {
        assert_eq!(full_name("Ana", "Ruiz"), "Ana Ruiz");
        assert_eq!(full_name("Ana", ""), "Ana");
        assert_eq!(full_name(" ", "Ruiz"), "Ruiz");
    }

    #[test]
    fn client_summary_serializes_camel_case_with_date_only_birthday() {
        let timestamp = NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let item = ClientListItem {
            id: ClientId::new(1).unwrap(),
            is_deleted: false,
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            birthday: NaiveDate::from_ymd_opt(1988, 4, 2),
            zip: Some("84101".to_string()),
            phone: Some("8015550199".to_string()),
            email: None,
            created_by: AuditStamp {
                user_id: UserId::new(2).unwrap(),
                first_name: "Case".to_string(),
                last_name: "Worker".to_string(),
                timestamp,
            },
        };

        let value = serde_json::to_value(ClientSummary::from(item)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "isDeleted": false,
                "firstName": "Ana",
                "lastName": "Ruiz",
                "fullName": "Ana Ruiz",
                "birthday": "1988-04-02",
                "zip": "84101",
                "phone": "8015550199",
                "email": null,
                "createdBy": {
                    "userId": 2,
                    "firstName": "Case",
                    "lastName": "Worker",
                    "fullName": "Case Worker",
                    "timestamp": "2023-05-01T09:30:00"
                }
            })
        );
    }

    #[test]
    fn error_response_omits_empty_unknown_keys() {
        let value = serde_json::to_value(ErrorResponse::new("Database error")).unwrap();
        assert_eq!(value, json!({ "errors": ["Database error"] }));
    }
}
