// Test helpers for database-backed integration tests.
//
// All helpers use a real PostgreSQL connection; tests that need one are
// marked #[ignore] so the default suite stays self-contained.

pub mod test_database;

pub use test_database::*;
