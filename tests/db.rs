use diesel::prelude::*;
use diesel::sql_types::BigInt;

mod common;

#[derive(QueryableByName)]
struct Pragma {
    #[diesel(sql_type = BigInt)]
    foreign_keys: i64,
}

#[test]
fn test_pool_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new("test_pool_connections.db");
    let mut conn = test_db.pool().get().unwrap();

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .unwrap();
    assert_eq!(pragma.foreign_keys, 1);
}
