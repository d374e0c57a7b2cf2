use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Append a daily field report to a job.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        job_id,
        date: report_date,
        crew,
        hours,
        material,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (optional, defaults to today)
        //
        let d = match report_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // 2. Open DB
        //
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 3. Execute logic
        //
        ReportLogic::append(
            &mut pool,
            *job_id,
            d,
            *crew,
            *hours,
            *material,
            notes.clone(),
        )?;
    }

    Ok(())
}
