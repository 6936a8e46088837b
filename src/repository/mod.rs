use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::client::{ClientListItem, ClientSortField, ServiceScope, SortOrder};
use crate::domain::client_log::ClientLog;
use crate::domain::types::{ClientId, NonEmptyString, PhoneDigits};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod client_log;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filters, ordering and paging of the client list.
///
/// Every field is already validated; the query builder binds them as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientListQuery {
    pub id: Option<ClientId>,
    pub name: Option<NonEmptyString>,
    pub zip: Option<NonEmptyString>,
    pub phone: Option<PhoneDigits>,
    pub interest: Option<ServiceScope>,
    pub interaction: Option<ServiceScope>,
    pub wants_sms: bool,
    pub sort_field: Option<ClientSortField>,
    pub sort_order: SortOrder,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: NonEmptyString) -> Self {
        self.name = Some(name);
        self
    }

    pub fn zip(mut self, zip: NonEmptyString) -> Self {
        self.zip = Some(zip);
        self
    }

    pub fn phone(mut self, phone: PhoneDigits) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Keep clients whose latest intake lists an interest in the scope.
    pub fn interest(mut self, scope: ServiceScope) -> Self {
        self.interest = Some(scope);
        self
    }

    /// Keep clients with at least one live interaction in the scope.
    pub fn interaction(mut self, scope: ServiceScope) -> Self {
        self.interaction = Some(scope);
        self
    }

    pub fn wants_sms(mut self, wants_sms: bool) -> Self {
        self.wants_sms = wants_sms;
        self
    }

    pub fn sort(mut self, field: Option<ClientSortField>, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClientReader {
    /// Returns the number of clients matching the filters, ignoring paging,
    /// together with the requested page of clients.
    fn list_clients(&self, query: ClientListQuery)
    -> RepositoryResult<(usize, Vec<ClientListItem>)>;
}

pub trait ClientLogReader {
    /// Returns the newest `limit` log entries of the client.
    fn list_client_logs(&self, client_id: ClientId, limit: usize)
    -> RepositoryResult<Vec<ClientLog>>;
}

/// Diesel-backed repository sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
