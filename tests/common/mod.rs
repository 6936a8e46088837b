#![allow(dead_code)]

use casework_crm::db::{DbPool, establish_connection_pool};
use diesel::connection::SimpleConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database living in a temporary directory, migrated on creation.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn execute(&self, sql: &str) {
        let mut conn = self.pool.get().expect("get connection");
        conn.batch_execute(sql).expect("seed data");
    }

    /// Loads a small caseload covering every list filter.
    ///
    /// Clients:
    /// 1 Ana Ruiz    - zip moved 84101 -> 84102, SMS on, interest in service 1,
    ///                 one live interaction with service 2
    /// 2 Ben Adams   - zip 84101, older intake asked for service 1, latest for 3
    /// 3 carl Zane   - zip 84103, only a deleted interaction with service 2
    /// 4 Dana Adams  - soft-deleted, zip 84101, interest in service 1
    /// 5 Eve Brown   - zip 84101, two contact rows sharing the latest timestamp
    pub fn seed_caseload(&self) {
        self.execute(
            "
            INSERT INTO users (id, first_name, last_name) VALUES (1, 'Case', 'Worker');

            INSERT INTO programs (id, name) VALUES (1, 'Food'), (2, 'Housing');
            INSERT INTO services (id, program_id, name) VALUES
                (1, 1, 'Pantry'), (2, 1, 'Meals'), (3, 2, 'Rent help');

            INSERT INTO clients (id, first_name, last_name, birthday, is_deleted, added_by, date_added) VALUES
                (1, 'Ana', 'Ruiz', '1990-03-01', 0, 1, '2024-01-01 10:00:00'),
                (2, 'Ben', 'Adams', '1985-07-15', 0, 1, '2024-01-02 10:00:00'),
                (3, 'carl', 'Zane', NULL, 0, 1, '2024-01-03 10:00:00'),
                (4, 'Dana', 'Adams', '1970-01-01', 1, 1, '2024-01-04 10:00:00'),
                (5, 'Eve', 'Brown', '2001-12-31', 0, 1, '2024-01-05 10:00:00');

            INSERT INTO contact_information (id, client_id, email, primary_phone, zip, text_messages, date_added) VALUES
                (1, 1, 'ana@old.example', '8015550100', '84101', 0, '2024-01-01 10:00:00'),
                (2, 1, 'ana@example.com', '8015550111', '84102', 1, '2024-02-01 10:00:00'),
                (3, 2, 'ben@example.com', '3855550122', '84101', 0, '2024-01-02 10:00:00'),
                (4, 3, NULL, NULL, '84103', 1, '2024-01-03 10:00:00'),
                (5, 4, 'dana@example.com', '8015550144', '84101', 1, '2024-01-04 10:00:00'),
                (6, 5, 'eve@old.example', '8015550155', '84999', 0, '2024-01-05 10:00:00'),
                (7, 5, 'eve@example.com', '8015550156', '84101', 0, '2024-01-05 10:00:00');

            INSERT INTO intake_data (id, client_id, date_added) VALUES
                (1, 1, '2024-01-01 10:00:00'),
                (2, 2, '2024-01-02 10:00:00'),
                (3, 2, '2024-03-02 10:00:00'),
                (4, 4, '2024-01-04 10:00:00');
            INSERT INTO intake_services (intake_data_id, service_id) VALUES
                (1, 1), (2, 1), (3, 3), (4, 1);

            INSERT INTO client_interactions (client_id, service_id, is_deleted, date_added) VALUES
                (1, 2, 0, '2024-02-10 10:00:00'),
                (3, 2, 1, '2024-02-11 10:00:00'),
                (4, 2, 0, '2024-02-12 10:00:00');

            INSERT INTO client_logs (client_id, title, description, log_type, added_by, date_added) VALUES
                (1, 'Intake completed', NULL, 'intake', 1, '2024-01-01 10:00:00'),
                (1, 'Called client', 'Left a voicemail', 'call', 1, '2024-02-01 10:00:00'),
                (1, 'Profile edited', NULL, 'edit', 1, '2024-02-01 10:00:00');
            ",
        );
    }

    /// Inserts `count` live clients named `Client <n> Bulk` with one contact row each.
    pub fn seed_bulk_clients(&self, count: usize) {
        let mut sql = String::from(
            "INSERT INTO users (id, first_name, last_name) VALUES (1, 'Case', 'Worker');",
        );
        for n in 1..=count {
            sql.push_str(&format!(
                "INSERT INTO clients (id, first_name, last_name, is_deleted, added_by) \
                 VALUES ({n}, 'Client {n:03}', 'Bulk', 0, 1);\
                 INSERT INTO contact_information (client_id, zip, text_messages) \
                 VALUES ({n}, '84101', 0);"
            ));
        }
        self.execute(&sql);
    }
}
