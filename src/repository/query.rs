//! SQL construction for the client list.
//!
//! Filters are modelled as [`Clause`] values that own both their SQL text and
//! their bind values. Joins are emitted before the `WHERE` clause and their
//! binds are collected first, so the bind list always follows placeholder
//! order in the final text. User input never reaches the SQL text: strings
//! are bound, and sort columns come from a closed enum.

use crate::domain::client::{ClientSortField, ServiceScope, SortOrder};
use crate::pagination::page_offset;
use crate::repository::ClientListQuery;

/// Positional value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Integer(i64),
    Text(String),
}

/// Parameterized SQL text with its binds in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl Statement {
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

/// Rows of the requested page plus the total count over the same filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientListPlan {
    pub rows: Statement,
    pub count: Statement,
}

#[derive(Debug, Clone)]
struct Clause {
    sql: String,
    binds: Vec<BindValue>,
}

impl Clause {
    fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            binds: Vec::new(),
        }
    }

    fn bind(mut self, value: BindValue) -> Self {
        self.binds.push(value);
        self
    }
}

const CLIENT_COLUMNS: &str = "cl.id, cl.first_name, cl.last_name, \
     date(cl.birthday) AS birthday, cl.is_deleted, \
     ct.email, ct.zip, ct.primary_phone, \
     cl.added_by AS added_by_id, us.first_name AS added_by_first_name, \
     us.last_name AS added_by_last_name, cl.date_added";

// Latest contact row per client; equal timestamps resolve to the highest id.
const CLIENT_SOURCE: &str = "FROM clients cl \
     JOIN contact_information ct ON ct.id = (\
     SELECT latest_ct.id FROM contact_information latest_ct \
     WHERE latest_ct.client_id = cl.id \
     ORDER BY latest_ct.date_added DESC, latest_ct.id DESC LIMIT 1) \
     JOIN users us ON us.id = cl.added_by";

const LATEST_INTAKE_JOIN: &str = "JOIN intake_data intake ON intake.id = (\
     SELECT latest_intake.id FROM intake_data latest_intake \
     WHERE latest_intake.client_id = cl.id \
     ORDER BY latest_intake.date_added DESC, latest_intake.id DESC LIMIT 1)";

fn scope_condition(column: &str, scope: ServiceScope) -> Clause {
    match scope {
        ServiceScope::Program(program_id) => Clause::new(format!(
            "{column} IN (SELECT id FROM services WHERE program_id = ?)"
        ))
        .bind(BindValue::Integer(program_id.get().into())),
        ServiceScope::Service(service_id) => {
            Clause::new(format!("{column} = ?")).bind(BindValue::Integer(service_id.get().into()))
        }
    }
}

fn joins(query: &ClientListQuery) -> Vec<Clause> {
    let mut joins = Vec::new();

    if query.interest.is_some() {
        joins.push(Clause::new(LATEST_INTAKE_JOIN));
    }

    if let Some(scope) = query.interaction {
        let service = scope_condition("ci.service_id", scope);
        joins.push(Clause {
            sql: format!(
                "JOIN (SELECT ci.client_id, COUNT(*) AS num_interactions \
                 FROM client_interactions ci \
                 WHERE ci.is_deleted = 0 AND {} \
                 GROUP BY ci.client_id) interaction_counts \
                 ON interaction_counts.client_id = cl.id",
                service.sql
            ),
            binds: service.binds,
        });
    }

    joins
}

fn predicates(query: &ClientListQuery) -> Vec<Clause> {
    let mut predicates = vec![Clause::new("cl.is_deleted = 0")];

    if let Some(name) = &query.name {
        predicates.push(
            Clause::new("instr(cl.first_name || ' ' || cl.last_name, ?) > 0")
                .bind(BindValue::Text(name.as_str().to_string())),
        );
    }

    if let Some(zip) = &query.zip {
        predicates.push(Clause::new("ct.zip = ?").bind(BindValue::Text(zip.as_str().to_string())));
    }

    if let Some(id) = query.id {
        predicates.push(Clause::new("cl.id = ?").bind(BindValue::Integer(id.get().into())));
    }

    if let Some(phone) = &query.phone {
        predicates.push(
            Clause::new("ct.primary_phone LIKE ?")
                .bind(BindValue::Text(format!("%{}%", phone.as_str()))),
        );
    }

    if let Some(scope) = query.interest {
        let service = scope_condition("isv.service_id", scope);
        predicates.push(Clause {
            sql: format!(
                "EXISTS (SELECT 1 FROM intake_services isv \
                 WHERE isv.intake_data_id = intake.id AND {})",
                service.sql
            ),
            binds: service.binds,
        });
    }

    if query.interaction.is_some() {
        predicates.push(Clause::new("interaction_counts.num_interactions > 0"));
    }

    if query.wants_sms {
        predicates.push(Clause::new("ct.text_messages = 1"));
    }

    predicates
}

fn sort_column(field: ClientSortField) -> &'static str {
    match field {
        ClientSortField::Id => "cl.id",
        ClientSortField::FirstName => "cl.first_name",
        ClientSortField::LastName => "cl.last_name",
        ClientSortField::Birthday => "cl.birthday",
    }
}

fn order_by(field: Option<ClientSortField>, order: SortOrder) -> String {
    let direction = match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };
    match field {
        Some(field) => format!("ORDER BY {} {direction}", sort_column(field)),
        None => format!("ORDER BY cl.last_name {direction}, cl.first_name {direction}"),
    }
}

/// Builds the row and count statements for a validated client list query.
pub fn build_client_list(query: &ClientListQuery) -> ClientListPlan {
    let joins = joins(query);
    let predicates = predicates(query);

    let mut source = String::from(CLIENT_SOURCE);
    let mut filter_binds = Vec::new();
    for join in joins {
        source.push(' ');
        source.push_str(&join.sql);
        filter_binds.extend(join.binds);
    }

    let mut conditions = Vec::with_capacity(predicates.len());
    for predicate in predicates {
        conditions.push(predicate.sql);
        filter_binds.extend(predicate.binds);
    }
    let filtered = format!("{source} WHERE {}", conditions.join(" AND "));

    let count = Statement {
        sql: format!("SELECT COUNT(*) AS count {filtered}"),
        binds: filter_binds.clone(),
    };

    let mut rows_sql = format!(
        "SELECT {CLIENT_COLUMNS} {filtered} {}",
        order_by(query.sort_field, query.sort_order)
    );
    let mut rows_binds = filter_binds;
    if let Some(pagination) = query.pagination {
        rows_sql.push_str(" LIMIT ? OFFSET ?");
        // Out-of-range pages are rejected by the form; saturate to an empty page here.
        let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
        let offset = page_offset(pagination.page, pagination.per_page).unwrap_or(i64::MAX);
        rows_binds.push(BindValue::Integer(limit));
        rows_binds.push(BindValue::Integer(offset));
    }

    ClientListPlan {
        rows: Statement {
            sql: rows_sql,
            binds: rows_binds,
        },
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ClientId, NonEmptyString, PhoneDigits, ProgramId, ServiceId};
    use crate::pagination::CLIENTS_PER_PAGE;

    fn assert_binds_match(plan: &ClientListPlan) {
        assert_eq!(plan.rows.placeholder_count(), plan.rows.binds.len());
        assert_eq!(plan.count.placeholder_count(), plan.count.binds.len());
    }

    fn every_filter() -> ClientListQuery {
        ClientListQuery::new()
            .name(NonEmptyString::new("Ana").unwrap())
            .zip(NonEmptyString::new("84101").unwrap())
            .id(ClientId::new(4).unwrap())
            .phone(PhoneDigits::new("555-01").unwrap())
            .interest(ServiceScope::Program(ProgramId::new(2).unwrap()))
            .interaction(ServiceScope::Service(ServiceId::new(8).unwrap()))
            .wants_sms(true)
            .paginate(3, CLIENTS_PER_PAGE)
    }

    #[test]
    fn unfiltered_query_has_no_binds_and_no_limit() {
        let plan = build_client_list(&ClientListQuery::new());

        assert_binds_match(&plan);
        assert!(plan.rows.binds.is_empty());
        assert!(!plan.rows.sql.contains("LIMIT ?"));
        assert!(plan.rows.sql.contains("WHERE cl.is_deleted = 0"));
        assert!(plan.count.sql.starts_with("SELECT COUNT(*) AS count FROM clients cl"));
    }

    #[test]
    fn default_sort_is_last_then_first_name_ascending() {
        let plan = build_client_list(&ClientListQuery::new());
        assert!(
            plan.rows
                .sql
                .ends_with("ORDER BY cl.last_name ASC, cl.first_name ASC")
        );
        assert!(!plan.count.sql.contains("cl.last_name ASC"));
        assert!(!plan.count.sql.ends_with("cl.first_name ASC"));
    }

    #[test]
    fn birthday_descending_sorts_by_birthday_only() {
        let query = ClientListQuery::new().sort(Some(ClientSortField::Birthday), SortOrder::Desc);
        let plan = build_client_list(&query);
        assert!(plan.rows.sql.ends_with("ORDER BY cl.birthday DESC"));
    }

    #[test]
    fn default_sort_applies_descending_to_both_names() {
        let query = ClientListQuery::new().sort(None, SortOrder::Desc);
        let plan = build_client_list(&query);
        assert!(
            plan.rows
                .sql
                .ends_with("ORDER BY cl.last_name DESC, cl.first_name DESC")
        );
    }

    #[test]
    fn pagination_binds_page_size_and_offset_last() {
        let plan = build_client_list(&ClientListQuery::new().paginate(3, CLIENTS_PER_PAGE));

        assert_binds_match(&plan);
        assert!(plan.rows.sql.ends_with("LIMIT ? OFFSET ?"));
        assert_eq!(
            plan.rows.binds,
            vec![BindValue::Integer(100), BindValue::Integer(200)]
        );
        assert!(plan.count.binds.is_empty());
        assert!(!plan.count.sql.contains("LIMIT ?"));
    }

    #[test]
    fn huge_page_saturates_offset_instead_of_overflowing() {
        let plan = build_client_list(&ClientListQuery::new().paginate(usize::MAX, CLIENTS_PER_PAGE));

        assert_binds_match(&plan);
        assert_eq!(
            plan.rows.binds,
            vec![BindValue::Integer(100), BindValue::Integer(i64::MAX)]
        );
    }

    #[test]
    fn optional_joins_are_absent_without_their_filters() {
        let plan = build_client_list(
            &ClientListQuery::new().name(NonEmptyString::new("Ana").unwrap()),
        );
        assert!(!plan.rows.sql.contains("intake_data"));
        assert!(!plan.rows.sql.contains("client_interactions"));
        assert!(!plan.count.sql.contains("intake_data"));
        assert!(!plan.count.sql.contains("client_interactions"));
    }

    #[test]
    fn interest_filter_joins_latest_intake() {
        let query =
            ClientListQuery::new().interest(ServiceScope::Service(ServiceId::new(6).unwrap()));
        let plan = build_client_list(&query);

        assert_binds_match(&plan);
        assert!(plan.rows.sql.contains(LATEST_INTAKE_JOIN));
        assert!(plan.rows.sql.contains("isv.service_id = ?"));
        assert!(!plan.rows.sql.contains("client_interactions"));
        assert_eq!(plan.rows.binds, vec![BindValue::Integer(6)]);
    }

    #[test]
    fn program_scope_expands_to_its_services() {
        let query = ClientListQuery::new()
            .interaction(ServiceScope::Program(ProgramId::new(3).unwrap()));
        let plan = build_client_list(&query);

        assert_binds_match(&plan);
        assert!(
            plan.rows
                .sql
                .contains("ci.service_id IN (SELECT id FROM services WHERE program_id = ?)")
        );
        assert!(plan.rows.sql.contains("ci.is_deleted = 0"));
        assert!(plan.rows.sql.contains("interaction_counts.num_interactions > 0"));
        assert!(!plan.rows.sql.contains("intake_data"));
    }

    #[test]
    fn binds_follow_placeholder_order_with_every_filter() {
        let plan = build_client_list(&every_filter());

        assert_binds_match(&plan);
        // The interaction join precedes WHERE, so its bind comes first.
        let filter_binds = vec![
            BindValue::Integer(8),
            BindValue::Text("Ana".to_string()),
            BindValue::Text("84101".to_string()),
            BindValue::Integer(4),
            BindValue::Text("%55501%".to_string()),
            BindValue::Integer(2),
        ];
        assert_eq!(plan.count.binds, filter_binds);

        let mut row_binds = filter_binds;
        row_binds.extend([BindValue::Integer(100), BindValue::Integer(200)]);
        assert_eq!(plan.rows.binds, row_binds);
        assert!(plan.rows.sql.contains("ct.text_messages = 1"));
    }

    #[test]
    fn user_strings_never_reach_sql_text() {
        let hostile = "x'); DROP TABLE clients; --";
        let query = ClientListQuery::new()
            .name(NonEmptyString::new(hostile).unwrap())
            .zip(NonEmptyString::new(hostile).unwrap());
        let plan = build_client_list(&query);

        assert_binds_match(&plan);
        assert!(!plan.rows.sql.contains("DROP TABLE"));
        assert!(!plan.count.sql.contains("DROP TABLE"));
    }

    #[test]
    fn zip_is_exact_and_phone_is_substring() {
        let query = ClientListQuery::new()
            .zip(NonEmptyString::new("84101").unwrap())
            .phone(PhoneDigits::new("555").unwrap());
        let plan = build_client_list(&query);

        assert!(plan.rows.sql.contains("ct.zip = ?"));
        assert!(plan.rows.sql.contains("ct.primary_phone LIKE ?"));
        assert_eq!(
            plan.rows.binds,
            vec![
                BindValue::Text("84101".to_string()),
                BindValue::Text("%555%".to_string())
            ]
        );
    }

    #[test]
    fn wants_sms_false_adds_no_predicate() {
        let plan = build_client_list(&ClientListQuery::new().wants_sms(false));
        assert!(!plan.rows.sql.contains("text_messages"));
    }
}
