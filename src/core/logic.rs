use crate::config::Config;
use crate::core::calculator;
use crate::models::{cost_summary::CostSummary, daily_report::DailyReport, job::Job};

pub struct Core;

impl Core {
    pub fn build_cost_summary(job: &Job, reports: &[DailyReport], cfg: &Config) -> CostSummary {
        calculator::cost_summary(job, reports, cfg.labor_rate)
    }
}
