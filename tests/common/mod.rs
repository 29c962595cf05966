//! Helpers for integration tests.

use game_reviews::db::{DbPool, establish_connection_pool, run_migrations};
use game_reviews::seed::{seed, test_data};
use tempfile::NamedTempFile;

/// Temporary database migrated and loaded with the fixture data.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        run_migrations(&mut conn).expect("Migrations failed");
        let data = test_data().expect("Fixture data should be valid");
        seed(&mut conn, &data).expect("Seeding failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
