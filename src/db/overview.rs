// src/db/overview.rs
use crate::errors::ServerError;
use rusqlite::Connection;

/// Headline counts for the overview page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverviewCounts {
    pub flights: i64,
    pub passengers: i64,
    pub airports: i64,
    pub airlines: i64,
}

pub fn get_overview_counts(conn: &Connection) -> Result<OverviewCounts, ServerError> {
    conn.query_row(
        r#"
        select
            (select count(*) from flights),
            (select count(*) from passengers),
            (select count(*) from airports),
            (select count(*) from airlines)
        "#,
        [],
        |row| {
            Ok(OverviewCounts {
                flights: row.get(0)?,
                passengers: row.get(1)?,
                airports: row.get(2)?,
                airlines: row.get(3)?,
            })
        },
    )
    .map_err(|e| ServerError::DbError(format!("failed to load overview counts: {e}")))
}
