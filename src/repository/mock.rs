//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::ClientListItem;
use crate::domain::client_log::ClientLog;
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientLogReader, ClientReader};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn list_clients(
            &self,
            query: ClientListQuery,
        ) -> RepositoryResult<(usize, Vec<ClientListItem>)>;
    }

    impl ClientLogReader for Repository {
        fn list_client_logs(
            &self,
            client_id: ClientId,
            limit: usize,
        ) -> RepositoryResult<Vec<ClientLog>>;
    }
}
