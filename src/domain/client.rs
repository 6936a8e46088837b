use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::audit::AuditStamp;
use crate::domain::types::{ClientId, ProgramId, ServiceId};

/// Client as shown in the client list, joined with its latest contact row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientListItem {
    pub id: ClientId,
    pub is_deleted: bool,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_by: AuditStamp,
}

/// Narrows a filter either to one service or to every service of a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceScope {
    Program(ProgramId),
    Service(ServiceId),
}

/// Columns the client list may be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientSortField {
    Id,
    FirstName,
    LastName,
    Birthday,
}

impl ClientSortField {
    /// Accepted query-string spellings, in the order they are documented.
    pub const VALUES: [&'static str; 4] = ["id", "firstName", "lastName", "birthday"];
}

impl Display for ClientSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientSortField::Id => write!(f, "id"),
            ClientSortField::FirstName => write!(f, "firstName"),
            ClientSortField::LastName => write!(f, "lastName"),
            ClientSortField::Birthday => write!(f, "birthday"),
        }
    }
}

impl FromStr for ClientSortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(ClientSortField::Id),
            "firstName" => Ok(ClientSortField::FirstName),
            "lastName" => Ok(ClientSortField::LastName),
            "birthday" => Ok(ClientSortField::Birthday),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const VALUES: [&'static str; 2] = ["asc", "desc"];
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}
