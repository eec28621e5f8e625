//! Database connection management

use sqlx::{PgPool, Postgres, Row, Transaction, migrate::MigrateError, postgres::PgRow, query};

/// SQL used to bound how long a transaction waits on a row lock.
pub const SET_LOCK_TIMEOUT_SQL: &str = "SELECT set_config('lock_timeout', $1, true)";

/// Default lock timeout, in milliseconds.
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5_000;

/// Largest value a `BIGINT` amount or counter column holds.
pub const MAX_STORED_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// `lock_not_available`
const LOCK_NOT_AVAILABLE: &str = "55P03";

/// `serialization_failure`
const SERIALIZATION_FAILURE: &str = "40001";

/// `deadlock_detected`
const DEADLOCK_DETECTED: &str = "40P01";

/// `numeric_value_out_of_range`
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    lock_timeout_ms: u64,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub fn with_lock_timeout(mut self, lock_timeout_ms: u64) -> Self {
        self.lock_timeout_ms = lock_timeout_ms;
        self
    }

    /// Begin a transaction with a local lock timeout applied.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting the timeout fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_LOCK_TIMEOUT_SQL)
            .bind(format!("{}ms", self.lock_timeout_ms))
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Whether the error means the transaction lost a race for a lock.
pub(crate) fn is_concurrency_conflict(error: &sqlx::Error) -> bool {
    has_sqlstate(
        error,
        &[LOCK_NOT_AVAILABLE, SERIALIZATION_FAILURE, DEADLOCK_DETECTED],
    )
}

/// Whether the error is an integer overflow raised by Postgres.
pub(crate) fn is_out_of_range(error: &sqlx::Error) -> bool {
    has_sqlstate(error, &[NUMERIC_VALUE_OUT_OF_RANGE])
}

fn has_sqlstate(error: &sqlx::Error, codes: &[&str]) -> bool {
    error
        .as_database_error()
        .and_then(|db_error| db_error.code())
        .is_some_and(|code| codes.contains(&code.as_ref()))
}

/// Decode a non-negative money column into minor units.
pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    try_get_unsigned(row, col)
}

/// Decode a non-negative counter column (item totals, versions).
pub(crate) fn try_get_count(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    try_get_unsigned(row, col)
}

fn try_get_unsigned(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let value_i64: i64 = row.try_get(col)?;

    u64::try_from(value_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Decode a positive quantity column.
pub(crate) fn try_get_quantity(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let quantity_i32: i32 = row.try_get(col)?;

    u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Encode minor units for a `BIGINT` column.
pub(crate) fn encode_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
