use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::ui::messages::warning;

use rusqlite::Row;
use rusqlite::params;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export daily reports joined with their job number.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    /// - `job_id`: `None` for all jobs, `Some(id)` for one job
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        job_id: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        // exporting an unknown job is an error, not an empty file
        if let Some(id) = job_id {
            crate::db::queries::get_job(&pool.conn, id)?;
        }

        let reports = load_reports(pool, job_id)?;

        if reports.is_empty() {
            warning("⚠️  No daily reports found for selected job(s).");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&reports, path)?,
            ExportFormat::Json => export_json(&reports, path)?,
        }

        Ok(())
    }
}

/// Load export rows from the DB, optionally for a single job.
fn load_reports(pool: &mut DbPool, job_id: Option<i64>) -> AppResult<Vec<ReportExport>> {
    let conn = &mut pool.conn;

    let mut reports = Vec::new();

    match job_id {
        None => {
            let mut stmt = conn.prepare(
                "SELECT r.id, r.job_id, j.job_number, r.date, r.crew_size, r.hours,
                        r.material_cost, r.notes
                 FROM daily_reports r
                 JOIN jobs j ON j.id = r.job_id
                 ORDER BY r.job_id ASC, r.date ASC, r.id ASC",
            )?;

            let rows = stmt.query_map([], map_row)?;

            for r in rows {
                reports.push(r?);
            }
        }
        Some(id) => {
            let mut stmt = conn.prepare(
                "SELECT r.id, r.job_id, j.job_number, r.date, r.crew_size, r.hours,
                        r.material_cost, r.notes
                 FROM daily_reports r
                 JOIN jobs j ON j.id = r.job_id
                 WHERE r.job_id = ?1
                 ORDER BY r.date ASC, r.id ASC",
            )?;

            let rows = stmt.query_map(params![id], map_row)?;

            for r in rows {
                reports.push(r?);
            }
        }
    }

    Ok(reports)
}

/// Mapping DB → ReportExport (shared by both queries).
fn map_row(row: &Row<'_>) -> rusqlite::Result<ReportExport> {
    Ok(ReportExport {
        id: row.get(0)?,
        job_id: row.get(1)?,
        job_number: row.get(2)?,
        date: row.get(3)?,
        crew_size: row.get(4)?,
        hours: row.get(5)?,
        material_cost: row.get(6)?,
        notes: row.get(7)?,
    })
}
