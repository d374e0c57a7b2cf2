use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `daily_reports` has a `notes` column.
fn reports_have_notes_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('daily_reports')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "notes" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `jobs` table with the modern schema.
fn create_jobs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            job_name          TEXT NOT NULL,
            job_number        TEXT NOT NULL DEFAULT '',
            client            TEXT NOT NULL DEFAULT '',
            contract_amount   REAL NOT NULL DEFAULT 0 CHECK(contract_amount >= 0),
            est_labor_hours   REAL NOT NULL DEFAULT 0 CHECK(est_labor_hours >= 0),
            est_material_cost REAL NOT NULL DEFAULT 0 CHECK(est_material_cost >= 0),
            created_at        TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `daily_reports` table with the modern schema (including `notes`).
fn create_daily_reports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_reports (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id        INTEGER NOT NULL REFERENCES jobs(id),
            date          TEXT NOT NULL,
            crew_size     REAL NOT NULL DEFAULT 0 CHECK(crew_size >= 0),
            hours         REAL NOT NULL DEFAULT 0 CHECK(hours >= 0),
            material_cost REAL NOT NULL DEFAULT 0 CHECK(material_cost >= 0),
            notes         TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_job_date ON daily_reports(job_id, date);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `daily_reports` table to include the `notes` column.
/// Gated on the log table so it runs exactly once per database.
fn migrate_add_notes_to_reports(conn: &Connection) -> Result<(), Error> {
    let version = "20260112_0001_add_notes_to_daily_reports";

    // 1) already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if reports_have_notes_column(conn)? {
        // fresh schema already has the column; just mark the version
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'notes column already present')",
            [version],
        )?;
        return Ok(());
    }

    // 2) apply
    conn.execute(
        "ALTER TABLE daily_reports ADD COLUMN notes TEXT NOT NULL DEFAULT '';",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'notes' column: {}", e)),
        )
    })?;

    // 3) mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added notes to daily_reports')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'notes' to daily_reports table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure jobs table
    if !table_exists(conn, "jobs")? {
        create_jobs_table(conn)?;
        success("Created jobs table (modern schema).");
    }

    // 3) Ensure daily_reports table
    if !table_exists(conn, "daily_reports")? {
        create_daily_reports_table(conn)?;
        success("Created daily_reports table (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_reports_job_date ON daily_reports(job_id, date);
            "#,
        )?;
    }

    // 4) Column-level migrations
    migrate_add_notes_to_reports(conn)?;

    Ok(())
}
