use clintrack_api::GroupCount;
use clintrack_db::PageRequest;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Postgres, QueryBuilder, Row};
use std::error::Error;
use std::str::FromStr;
use tracing::warn;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| {
            format!("Value for column '{col_name}' is too long (max {N} chars)").into()
        })
}

/// Decode every row, failing on the first bad one.
pub fn rows_into<T: TryFromRow<PgRow>>(
    rows: Vec<PgRow>,
) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
    rows.iter().map(T::try_from_row).collect()
}

/// `map_err` adapter that logs a failed query before it is propagated.
pub fn log_query_error(operation: &'static str) -> impl Fn(sqlx::Error) -> sqlx::Error {
    move |err| {
        warn!(operation, error = %err, "Query failed");
        err
    }
}

/// Append `LIMIT`/`OFFSET` for `page`
pub fn push_page(builder: &mut QueryBuilder<'_, Postgres>, page: PageRequest) {
    builder
        .push(" LIMIT ")
        .push_bind(page.limit as i64)
        .push(" OFFSET ")
        .push_bind(page.offset as i64);
}

/// Decode `key`/`count` rows of a grouped count query
pub fn group_counts(rows: Vec<PgRow>) -> Result<Vec<GroupCount>, Box<dyn Error + Send + Sync>> {
    rows.iter()
        .map(|row| -> Result<GroupCount, Box<dyn Error + Send + Sync>> {
            Ok(GroupCount {
                key: row.try_get("key")?,
                count: row.try_get("count")?,
            })
        })
        .collect()
}
