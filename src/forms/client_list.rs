//! Query parameters of the client list endpoint.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::client::{ClientSortField, ServiceScope, SortOrder};
use crate::domain::types::{ClientId, NonEmptyString, PhoneDigits, ProgramId, ServiceId};
use crate::forms::{FormError, ValidationReport};
use crate::pagination::{CLIENTS_PER_PAGE, page_offset};
use crate::repository::ClientListQuery;

/// Raw, untrusted query string of `GET /api/clients`.
///
/// Values stay strings until [`ClientListQuery::try_from`] has validated the
/// whole form, so every problem can be reported at once.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientListForm {
    #[validate(custom(function = "validate_page"))]
    pub page: Option<String>,
    #[validate(custom(
        function = "validate_non_empty",
        message = "Query param 'name' must be a non-empty string"
    ))]
    pub name: Option<String>,
    #[validate(custom(
        function = "validate_non_empty",
        message = "Query param 'zip' must be a non-empty string"
    ))]
    pub zip: Option<String>,
    #[validate(custom(
        function = "validate_positive_id",
        message = "Query param 'id' must be a positive integer"
    ))]
    pub id: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(custom(
        function = "validate_positive_id",
        message = "Query param 'programInterest' must be a positive integer"
    ))]
    pub program_interest: Option<String>,
    #[validate(custom(
        function = "validate_positive_id",
        message = "Query param 'serviceInterest' must be a positive integer"
    ))]
    pub service_interest: Option<String>,
    #[validate(custom(
        function = "validate_positive_id",
        message = "Query param 'programInteraction' must be a positive integer"
    ))]
    pub program_interaction: Option<String>,
    #[validate(custom(
        function = "validate_positive_id",
        message = "Query param 'serviceInteraction' must be a positive integer"
    ))]
    pub service_interaction: Option<String>,
    #[serde(rename = "wantsSMS")]
    #[validate(custom(function = "validate_wants_sms"))]
    pub wants_sms: Option<String>,
    #[validate(custom(function = "validate_sort_field"))]
    pub sort_field: Option<String>,
    #[validate(custom(function = "validate_sort_order"))]
    pub sort_order: Option<String>,
    /// Keys that match none of the fields above.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, String>,
}

impl ClientListForm {
    pub fn from_query_string(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|e| FormError::Malformed(e.to_string()))
    }
}

fn error_with_message(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn parse_page(value: &str) -> Result<usize, ValidationError> {
    let page = value.trim().parse::<i64>().map_err(|_| {
        error_with_message(
            "integer",
            format!("Query param 'page' must be an integer, got '{value}'"),
        )
    })?;
    if page < 1 {
        return Err(error_with_message(
            "page_range",
            format!("Invalid page {page}. Must be an integer greater than or equal to 1"),
        ));
    }
    usize::try_from(page)
        .ok()
        .filter(|&page| page_offset(page, CLIENTS_PER_PAGE).is_some())
        .ok_or_else(|| {
            error_with_message("page_range", format!("Invalid page {page}. Page is too large"))
        })
}

fn parse_bool(value: &str) -> Result<bool, ValidationError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(error_with_message(
            "boolean",
            format!("Query param 'wantsSMS' must be 'true' or 'false', got '{value}'"),
        )),
    }
}

fn parse_sort_field(value: &str) -> Result<ClientSortField, ValidationError> {
    value.parse().map_err(|_| {
        error_with_message(
            "enum",
            format!(
                "Query param 'sortField' must be one of {}, got '{value}'",
                ClientSortField::VALUES.join(", ")
            ),
        )
    })
}

fn parse_sort_order(value: &str) -> Result<SortOrder, ValidationError> {
    value.parse().map_err(|_| {
        error_with_message(
            "enum",
            format!(
                "Query param 'sortOrder' must be one of {}, got '{value}'",
                SortOrder::VALUES.join(", ")
            ),
        )
    })
}

fn validate_page(value: &str) -> Result<(), ValidationError> {
    parse_page(value).map(|_| ())
}

fn validate_non_empty(value: &str) -> Result<(), ValidationError> {
    NonEmptyString::new(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("non_empty"))
}

fn validate_positive_id(value: &str) -> Result<(), ValidationError> {
    // Any id newtype shares the same rule.
    value
        .parse::<ClientId>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("positive_id"))
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    PhoneDigits::new(value).map(|_| ()).map_err(|_| {
        error_with_message(
            "phone",
            "Query param 'phone' must contain at least one digit".to_string(),
        )
    })
}

fn validate_wants_sms(value: &str) -> Result<(), ValidationError> {
    parse_bool(value).map(|_| ())
}

fn validate_sort_field(value: &str) -> Result<(), ValidationError> {
    parse_sort_field(value).map(|_| ())
}

fn validate_sort_order(value: &str) -> Result<(), ValidationError> {
    parse_sort_order(value).map(|_| ())
}

fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Invalid query param value ({})", error.code),
    }
}

fn collect_messages(errors: &ValidationErrors, report: &mut ValidationReport) {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (_, errors) in fields {
        for error in errors {
            report.push(describe(error));
        }
    }
}

fn exclusive_message(first: &str, second: &str) -> String {
    format!("You may only provide one of the following query params: '{first}' or '{second}'")
}

fn scope(
    program: Option<&str>,
    service: Option<&str>,
) -> Result<Option<ServiceScope>, FormError> {
    let invalid = |e: crate::domain::types::TypeConstraintError| {
        FormError::InvalidQuery(ValidationReport::from(e.to_string()))
    };
    match (program, service) {
        (Some(program), _) => Ok(Some(ServiceScope::Program(
            program.parse::<ProgramId>().map_err(invalid)?,
        ))),
        (None, Some(service)) => Ok(Some(ServiceScope::Service(
            service.parse::<ServiceId>().map_err(invalid)?,
        ))),
        (None, None) => Ok(None),
    }
}

fn reject(error: ValidationError) -> FormError {
    FormError::InvalidQuery(ValidationReport::from(describe(&error)))
}

impl TryFrom<ClientListForm> for ClientListQuery {
    type Error = FormError;

    fn try_from(form: ClientListForm) -> Result<Self, Self::Error> {
        let mut report = ValidationReport::default();

        if let Err(errors) = form.validate() {
            collect_messages(&errors, &mut report);
        }

        if form.program_interest.is_some() && form.service_interest.is_some() {
            report.push(exclusive_message("programInterest", "serviceInterest"));
        }

        if form.program_interaction.is_some() && form.service_interaction.is_some() {
            report.push(exclusive_message("programInteraction", "serviceInteraction"));
        }

        if !form.unknown.is_empty() {
            report.unknown_keys = form.unknown.keys().cloned().collect();
            let quoted = report
                .unknown_keys
                .iter()
                .map(|key| format!("'{key}'"))
                .collect::<Vec<_>>()
                .join(", ");
            report.push(format!("Unknown query params: {quoted}"));
        }

        if !report.is_empty() {
            return Err(FormError::InvalidQuery(report));
        }

        let mut query = ClientListQuery::new();

        if let Some(page) = form.page.as_deref() {
            query = query.paginate(parse_page(page).map_err(reject)?, CLIENTS_PER_PAGE);
        }

        let invalid = |e: crate::domain::types::TypeConstraintError| {
            FormError::InvalidQuery(ValidationReport::from(e.to_string()))
        };

        if let Some(name) = form.name {
            query = query.name(NonEmptyString::new(name).map_err(invalid)?);
        }
        if let Some(zip) = form.zip {
            query = query.zip(NonEmptyString::new(zip).map_err(invalid)?);
        }
        if let Some(id) = form.id.as_deref() {
            query = query.id(id.parse::<ClientId>().map_err(invalid)?);
        }
        if let Some(phone) = form.phone {
            query = query.phone(PhoneDigits::new(phone).map_err(invalid)?);
        }
        if let Some(interest) = scope(
            form.program_interest.as_deref(),
            form.service_interest.as_deref(),
        )? {
            query = query.interest(interest);
        }
        if let Some(interaction) = scope(
            form.program_interaction.as_deref(),
            form.service_interaction.as_deref(),
        )? {
            query = query.interaction(interaction);
        }
        if let Some(wants_sms) = form.wants_sms.as_deref() {
            query = query.wants_sms(parse_bool(wants_sms).map_err(reject)?);
        }

        let sort_field = form
            .sort_field
            .as_deref()
            .map(parse_sort_field)
            .transpose()
            .map_err(reject)?;
        let sort_order = form
            .sort_order
            .as_deref()
            .map(parse_sort_order)
            .transpose()
            .map_err(reject)?
            .unwrap_or_default();

        Ok(query.sort(sort_field, sort_order))
    }
}
