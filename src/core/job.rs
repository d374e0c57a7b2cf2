use crate::db::log::jclog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_job;
use crate::errors::{AppError, AppResult};
use crate::models::job::Job;
use crate::ui::messages::success;

/// High-level business logic for the `job` command.
pub struct JobLogic;

/// Reject negative contract parameters before anything touches the DB.
/// Zero is fine (a job can be created before the estimate is final).
fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value < 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "{} must be >= 0, got {}",
            field, value
        )));
    }
    Ok(())
}

impl JobLogic {
    /// Validate and insert a new job, returning it with the assigned id.
    pub fn create(
        pool: &mut DbPool,
        job_name: String,
        job_number: String,
        client: String,
        contract_amount: f64,
        est_labor_hours: f64,
        est_material_cost: f64,
    ) -> AppResult<Job> {
        ensure_non_negative("contract amount", contract_amount)?;
        ensure_non_negative("estimated labor hours", est_labor_hours)?;
        ensure_non_negative("estimated material cost", est_material_cost)?;

        if job_name.trim().is_empty() {
            return Err(AppError::Other("Job name cannot be empty".to_string()));
        }

        let mut job = Job::new(
            job_name,
            job_number,
            client,
            contract_amount,
            est_labor_hours,
            est_material_cost,
        );

        job.id = insert_job(&pool.conn, &job)?;

        success(format!("Job #{} created: {}", job.id, job.label()));

        // internal log (non-blocking)
        if let Err(e) = jclog(
            &pool.conn,
            "job",
            &job.id.to_string(),
            &format!("Created job '{}'", job.label()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(job)
    }
}
