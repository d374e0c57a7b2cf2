use crate::db::log::jclog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_job, insert_report};
use crate::errors::{AppError, AppResult};
use crate::models::daily_report::DailyReport;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `report` command.
pub struct ReportLogic;

fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value < 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "{} must be >= 0, got {}",
            field, value
        )));
    }
    Ok(())
}

impl ReportLogic {
    /// Validate and append a daily report to an existing job.
    ///
    /// Every report must reference an existing job: the lookup runs first and
    /// a missing id fails with `JobNotFound` before any insert.
    pub fn append(
        pool: &mut DbPool,
        job_id: i64,
        date: NaiveDate,
        crew_size: f64,
        hours: f64,
        material_cost: f64,
        notes: String,
    ) -> AppResult<DailyReport> {
        ensure_non_negative("crew size", crew_size)?;
        ensure_non_negative("hours", hours)?;
        ensure_non_negative("material cost", material_cost)?;

        let job = get_job(&pool.conn, job_id)?;

        let mut report = DailyReport::new(job_id, date, crew_size, hours, material_cost, notes);
        report.id = insert_report(&pool.conn, &report)?;

        success(format!(
            "Report #{} added to job {} for {}: {} crew × {} h, materials {:.2}",
            report.id,
            job.label(),
            report.date_str(),
            crew_size,
            hours,
            material_cost
        ));

        // internal log (non-blocking)
        if let Err(e) = jclog(
            &pool.conn,
            "report",
            &format!("job {}", job_id),
            &format!("Added daily report for {}", report.date_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(report)
    }
}
