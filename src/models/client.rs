use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Date, Integer, Nullable, Text, Timestamp};

use crate::domain::audit::AuditStamp;
use crate::domain::client::ClientListItem;
use crate::domain::types::{ClientId, TypeConstraintError, UserId};

/// Row produced by the client list statement.
///
/// Field names match the column aliases emitted by
/// [`crate::repository::query::ClientListPlan`].
#[derive(Debug, Clone, QueryableByName)]
pub struct ClientListRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Date>)]
    pub birthday: Option<NaiveDate>,
    #[diesel(sql_type = Bool)]
    pub is_deleted: bool,
    #[diesel(sql_type = Nullable<Text>)]
    pub email: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub zip: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub primary_phone: Option<String>,
    #[diesel(sql_type = Integer)]
    pub added_by_id: i32,
    #[diesel(sql_type = Text)]
    pub added_by_first_name: String,
    #[diesel(sql_type = Text)]
    pub added_by_last_name: String,
    #[diesel(sql_type = Timestamp)]
    pub date_added: NaiveDateTime,
}

#[derive(QueryableByName)]
pub struct ClientCount {
    #[diesel(sql_type = BigInt)]
    pub count: i64,
}

impl TryFrom<ClientListRow> for ClientListItem {
    type Error = TypeConstraintError;

    fn try_from(row: ClientListRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(row.id)?,
            is_deleted: row.is_deleted,
            first_name: row.first_name,
            last_name: row.last_name,
            birthday: row.birthday,
            zip: row.zip,
            phone: row.primary_phone,
            email: row.email,
            created_by: AuditStamp {
                user_id: UserId::new(row.added_by_id)?,
                first_name: row.added_by_first_name,
                last_name: row.added_by_last_name,
                timestamp: row.date_added,
            },
        })
    }
}
