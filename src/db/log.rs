use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// One row of the internal `log` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// All rows, oldest first.
pub fn read_all(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn entries_come_back_in_insertion_order() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        ttlog(&conn, "init", "", "Database initialized").unwrap();
        ttlog(&conn, "rollover", "2024-01-01", "archived 1800 ml").unwrap();

        let rows = read_all(&conn).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].operation, "init");
        assert_eq!(rows[1].target, "2024-01-01");
        assert_eq!(rows[1].message, "archived 1800 ml");
    }
}
