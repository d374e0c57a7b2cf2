use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{count_reports_for_job, get_job, list_jobs, load_reports_for_job};
use crate::errors::AppResult;
use crate::models::daily_report::DailyReport;
use crate::models::job::Job;
use crate::utils::formatting::format_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { client, reports } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(job_id) = reports {
            let job = get_job(&pool.conn, *job_id)?;
            let rows = load_reports_for_job(&pool.conn, *job_id)?;

            if rows.is_empty() {
                println!("No daily reports for job {} yet.", job.label());
            } else {
                print_reports(&job, &rows, cfg);
            }
            return Ok(());
        }

        let mut jobs = list_jobs(&pool.conn)?;

        if let Some(needle) = client {
            let needle = needle.to_lowercase();
            jobs.retain(|j| j.client.to_lowercase().contains(&needle));
        }

        if jobs.is_empty() {
            println!("No jobs found. Create one with 'jobcost job'.");
            return Ok(());
        }

        print_jobs(&mut pool, &jobs, cfg)?;
    }
    Ok(())
}

fn print_jobs(pool: &mut DbPool, jobs: &[Job], cfg: &Config) -> AppResult<()> {
    println!("🏗️  Jobs:\n");

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 4,
        },
        Column {
            header: "Number".to_string(),
            width: 10,
        },
        Column {
            header: "Name".to_string(),
            width: 24,
        },
        Column {
            header: "Client".to_string(),
            width: 18,
        },
        Column {
            header: "Contract".to_string(),
            width: 14,
        },
        Column {
            header: "Reports".to_string(),
            width: 7,
        },
    ]);

    for job in jobs {
        let n_reports = count_reports_for_job(&pool.conn, job.id)?;
        table.add_row(vec![
            job.id.to_string(),
            job.job_number.clone(),
            job.job_name.clone(),
            job.client.clone(),
            format_money(job.contract_amount, &cfg.currency_symbol),
            n_reports.to_string(),
        ]);
    }

    println!("{}", table.render());
    Ok(())
}

fn print_reports(job: &Job, rows: &[DailyReport], cfg: &Config) {
    println!("📋 Daily reports for job {}:\n", job.label());

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 4,
        },
        Column {
            header: "Date".to_string(),
            width: 10,
        },
        Column {
            header: "Crew".to_string(),
            width: 6,
        },
        Column {
            header: "Hours".to_string(),
            width: 6,
        },
        Column {
            header: "Material".to_string(),
            width: 12,
        },
        Column {
            header: "Notes".to_string(),
            width: 30,
        },
    ]);

    for r in rows {
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            format!("{:.1}", r.crew_size),
            format!("{:.1}", r.hours),
            format_money(r.material_cost, &cfg.currency_symbol),
            r.notes.clone(),
        ]);
    }

    println!("{}", table.render());
}
