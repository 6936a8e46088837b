use diesel::prelude::*;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for staff users referenced by audit columns.
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}
