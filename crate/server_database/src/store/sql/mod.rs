use std::sync::LazyLock;

use rawsql::Loader;

use crate::{db_error, error::DbResult};

mod pgsql;
pub use pgsql::PgPool;

mod sqlite;
pub use sqlite::SqlitePool;

const PGSQL_FILE_QUERIES: &str = include_str!("query.sql");
const SQLITE_FILE_QUERIES: &str = include_str!("query_sqlite.sql");

static PGSQL_QUERIES: LazyLock<Loader> = LazyLock::new(|| {
    // SAFETY: SQL files are included at compile time and should be valid
    #[expect(clippy::expect_used)]
    Loader::get_queries_from(PGSQL_FILE_QUERIES).expect("Can't parse the SQL file")
});
static SQLITE_QUERIES: LazyLock<Loader> = LazyLock::new(|| {
    // SAFETY: SQL files are included at compile time and should be valid
    #[expect(clippy::expect_used)]
    Loader::get_queries_from(SQLITE_FILE_QUERIES).expect("Can't parse the SQL file")
});

/// Get the SQL query by name using the loader
pub(crate) fn get_query<'a>(loader: &'a Loader, name: &'a str) -> DbResult<&'a str> {
    loader
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| db_error!("{name} SQL query can't be found"))
}
