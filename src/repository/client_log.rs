use diesel::prelude::*;

use crate::domain::client_log::ClientLog;
use crate::domain::types::ClientId;
use crate::models::client_log::ClientLog as DbClientLog;
use crate::models::user::User as DbUser;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientLogReader, DieselRepository};

impl ClientLogReader for DieselRepository {
    fn list_client_logs(
        &self,
        client_id: ClientId,
        limit: usize,
    ) -> RepositoryResult<Vec<ClientLog>> {
        use crate::schema::{client_logs, users};

        let mut conn = self.conn()?;

        let rows = client_logs::table
            .inner_join(users::table)
            .filter(client_logs::client_id.eq(client_id.get()))
            .order((client_logs::date_added.desc(), client_logs::log_type.desc()))
            .limit(limit as i64)
            .select((DbClientLog::as_select(), DbUser::as_select()))
            .load::<(DbClientLog, DbUser)>(&mut conn)?;

        rows.into_iter()
            .map(|row| ClientLog::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}
