use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{get_job, load_reports_for_job};
use crate::errors::AppResult;
use crate::models::cost_summary::CostSummary;
use crate::models::job::Job;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_margin, color_for_percent};
use crate::utils::formatting::{format_hours, format_money, format_percent};

/// Show the estimate-vs-actual cost summary for a job.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        job_id,
        with_reports,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let job = get_job(&pool.conn, *job_id)?;
        let reports = load_reports_for_job(&pool.conn, *job_id)?;

        let summary = Core::build_cost_summary(&job, &reports, cfg);

        print_summary(&job, &summary, reports.len(), cfg);

        if *with_reports && !reports.is_empty() {
            println!("Reports:");
            for r in &reports {
                println!(
                    "- {} | crew {:.1} × {:.1} h | materials {} | {}",
                    r.date_str(),
                    r.crew_size,
                    r.hours,
                    format_money(r.material_cost, &cfg.currency_symbol),
                    if r.notes.is_empty() {
                        format!("{GREY}--{RESET}")
                    } else {
                        r.notes.clone()
                    }
                );
            }
            println!();
        }
    }
    Ok(())
}

fn print_summary(job: &Job, s: &CostSummary, n_reports: usize, cfg: &Config) {
    let sym = &cfg.currency_symbol;

    println!("\n=== Job #{} — {} ===", job.id, job.label());
    if !job.client.is_empty() {
        println!("Client: {}", job.client);
    }
    println!(
        "Contract: {} | Labor rate: {}/h | Reports: {}",
        format_money(job.contract_amount, sym),
        format_money(s.labor_rate, sym),
        n_reports
    );

    println!("\n{}Estimate{}", CYAN, RESET);
    println!(
        "  Labor    : {} ({})",
        format_money(s.est_labor_cost, sym),
        format_hours(job.est_labor_hours)
    );
    println!("  Material : {}", format_money(job.est_material_cost, sym));
    println!("  Total    : {}", format_money(s.est_total_cost, sym));
    println!(
        "  Margin   : {}{}{}",
        color_for_margin(s.est_margin),
        format_money(s.est_margin, sym),
        RESET
    );

    println!("\n{}Actual{}", CYAN, RESET);
    println!(
        "  Labor    : {} ({})",
        format_money(s.total_labor_cost, sym),
        format_hours(s.total_hours)
    );
    println!("  Material : {}", format_money(s.total_material_cost, sym));
    println!("  Total    : {}", format_money(s.total_actual_cost, sym));
    println!(
        "  Margin   : {}{}{}",
        color_for_margin(s.actual_margin),
        format_money(s.actual_margin, sym),
        RESET
    );

    println!("\n{}Budget used{}", CYAN, RESET);
    print_percent_line("Overall ", s.percent_used);
    print_percent_line("Labor   ", s.labor_percent_used);
    print_percent_line("Material", s.material_percent_used);
    println!();
}

fn print_percent_line(label: &str, pct: f64) {
    println!(
        "  {} : {}{}{}",
        label,
        color_for_percent(pct),
        format_percent(pct),
        RESET
    );
}
