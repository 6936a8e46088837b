use crate::domain::types::ClientId;
use crate::dto::api::{ClientLogsResponse, ClientsResponse};
use crate::forms::ValidationReport;
use crate::forms::client_list::ClientListForm;
use crate::pagination::{CLIENTS_PER_PAGE, PageInfo};
use crate::repository::{ClientListQuery, ClientLogReader, ClientReader};
use crate::services::{ServiceError, ServiceResult};

/// Maximum number of activity log entries returned for one client.
pub const CLIENT_LOGS_LIMIT: usize = 200;

/// Validates the list form and returns the requested page of clients.
pub fn list_clients<R>(repo: &R, form: ClientListForm) -> ServiceResult<ClientsResponse>
where
    R: ClientReader + ?Sized,
{
    let query = ClientListQuery::try_from(form)?;
    let current_page = query.pagination.map(|p| p.page);

    let (total, clients) = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;

    Ok(ClientsResponse {
        clients: clients.into_iter().map(Into::into).collect(),
        pagination: PageInfo::new(current_page, CLIENTS_PER_PAGE, total),
    })
}

/// Returns the newest activity log entries of a client.
pub fn list_client_logs<R>(repo: &R, raw_client_id: &str) -> ServiceResult<ClientLogsResponse>
where
    R: ClientLogReader + ?Sized,
{
    let client_id = raw_client_id.parse::<ClientId>().map_err(|_| {
        ServiceError::Validation(ValidationReport::from(format!(
            "Path param 'clientId' must be a positive integer, got '{raw_client_id}'"
        )))
    })?;

    let logs = repo
        .list_client_logs(client_id, CLIENT_LOGS_LIMIT)
        .map_err(|err| {
            log::error!("Failed to list logs for client {client_id}: {err}");
            err
        })?;

    if logs.is_empty() {
        return Err(ServiceError::NotFound(format!("Client {client_id}")));
    }

    Ok(ClientLogsResponse {
        logs: logs.into_iter().map(Into::into).collect(),
    })
}
