use crate::errors::{AppError, AppResult};
use crate::models::daily_report::DailyReport;
use crate::models::job::Job;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_job_row(row: &Row) -> Result<Job> {
    Ok(Job {
        id: row.get("id")?,
        job_name: row.get("job_name")?,
        job_number: row.get("job_number")?,
        client: row.get("client")?,
        contract_amount: row.get("contract_amount")?,
        est_labor_hours: row.get("est_labor_hours")?,
        est_material_cost: row.get("est_material_cost")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_report_row(row: &Row) -> Result<DailyReport> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DailyReport {
        id: row.get("id")?,
        job_id: row.get("job_id")?,
        date,
        crew_size: row.get("crew_size")?,
        hours: row.get("hours")?,
        material_cost: row.get("material_cost")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new job, returning the assigned rowid.
pub fn insert_job(conn: &Connection, job: &Job) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO jobs (job_name, job_number, client, contract_amount, est_labor_hours, est_material_cost, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            job.job_name,
            job.job_number,
            job.client,
            job.contract_amount,
            job.est_labor_hours,
            job.est_material_cost,
            job.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load a job by id. Missing id is a `JobNotFound` error, not a panic.
pub fn get_job(conn: &Connection, id: i64) -> AppResult<Job> {
    let mut stmt = conn.prepare("SELECT * FROM jobs WHERE id = ?1")?;

    stmt.query_row([id], map_job_row)
        .optional()?
        .ok_or(AppError::JobNotFound(id))
}

/// Load all jobs, oldest first.
pub fn list_jobs(conn: &Connection) -> AppResult<Vec<Job>> {
    let mut stmt = conn.prepare("SELECT * FROM jobs ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_job_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new daily report, returning the assigned rowid.
pub fn insert_report(conn: &Connection, report: &DailyReport) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO daily_reports (job_id, date, crew_size, hours, material_cost, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            report.job_id,
            report.date.format("%Y-%m-%d").to_string(),
            report.crew_size,
            report.hours,
            report.material_cost,
            report.notes,
            report.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load all daily reports for a job.
///
/// Reports are an unordered collection as far as the calculator is concerned;
/// the date/id ordering here is for display only.
pub fn load_reports_for_job(conn: &Connection, job_id: i64) -> AppResult<Vec<DailyReport>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM daily_reports
         WHERE job_id = ?1
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map([job_id], map_report_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Number of daily reports recorded against a job.
pub fn count_reports_for_job(conn: &Connection, job_id: i64) -> AppResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM daily_reports WHERE job_id = ?1",
        [job_id],
        |row| row.get(0),
    )?;
    Ok(count)
}
