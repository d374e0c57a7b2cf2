pub mod cost_summary;
pub mod daily_report;
pub mod job;
