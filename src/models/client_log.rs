use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::audit::AuditStamp;
use crate::domain::client_log::ClientLog as DomainClientLog;
use crate::domain::types::{ClientId, ClientLogId, TypeConstraintError, UserId};
use crate::models::user::User;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::client_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client_log::ClientLog`].
pub struct ClientLog {
    pub id: i32,
    pub client_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub log_type: String,
    pub added_by: i32,
    pub date_added: NaiveDateTime,
}

impl TryFrom<(ClientLog, User)> for DomainClientLog {
    type Error = TypeConstraintError;

    fn try_from((log, user): (ClientLog, User)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientLogId::new(log.id)?,
            client_id: ClientId::new(log.client_id)?,
            title: log.title,
            description: log.description,
            log_type: log.log_type,
            created_by: AuditStamp {
                user_id: UserId::new(user.id)?,
                first_name: user.first_name,
                last_name: user.last_name,
                timestamp: log.date_added,
            },
        })
    }
}
