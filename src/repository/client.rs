use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::Sqlite;

use crate::domain::client::ClientListItem;
use crate::models::client::{ClientCount, ClientListRow};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::query::{BindValue, Statement, build_client_list};
use crate::repository::{ClientListQuery, ClientReader, DieselRepository};

/// Turns a built statement into a Diesel query with its binds applied in order.
fn prepare(statement: &Statement) -> BoxedSqlQuery<'static, Sqlite, SqlQuery> {
    statement.binds.iter().fold(
        diesel::sql_query(statement.sql.clone()).into_boxed::<Sqlite>(),
        |query, bind| match bind {
            BindValue::Integer(value) => query.bind::<BigInt, _>(*value),
            BindValue::Text(value) => query.bind::<Text, _>(value.clone()),
        },
    )
}

impl ClientReader for DieselRepository {
    fn list_clients(
        &self,
        query: ClientListQuery,
    ) -> RepositoryResult<(usize, Vec<ClientListItem>)> {
        let plan = build_client_list(&query);
        let mut conn = self.conn()?;

        // Rows and count are read in one transaction so the total matches the page.
        let (rows, total) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let rows = prepare(&plan.rows).load::<ClientListRow>(conn)?;
            let total = prepare(&plan.count).get_result::<ClientCount>(conn)?;
            Ok((rows, total.count))
        })?;

        let clients = rows
            .into_iter()
            .map(ClientListItem::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((total as usize, clients))
    }
}
