use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::job::JobLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Create a new job with its estimated contract parameters.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Job {
        name,
        number,
        client,
        contract,
        est_labor_hours,
        est_material_cost,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        JobLogic::create(
            &mut pool,
            name.clone(),
            number.clone(),
            client.clone(),
            *contract,
            *est_labor_hours,
            *est_material_cost,
        )?;
    }

    Ok(())
}
