use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A field-recorded entry of labor and material consumption against a job on
/// a given date. Append-only: reports are never edited or deleted.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub id: i64,
    pub job_id: i64,        // ⇔ daily_reports.job_id (FK → jobs.id)
    pub date: NaiveDate,    // ⇔ daily_reports.date (TEXT "YYYY-MM-DD")
    pub crew_size: f64,     // ⇔ daily_reports.crew_size (REAL, fractional allowed)
    pub hours: f64,         // ⇔ daily_reports.hours (REAL)
    pub material_cost: f64, // ⇔ daily_reports.material_cost (REAL)
    pub notes: String,      // ⇔ daily_reports.notes (TEXT, default '')
    pub created_at: String, // ⇔ daily_reports.created_at (TEXT, ISO8601)
}

impl DailyReport {
    /// High-level constructor for reports created from the CLI.
    /// - `id = 0` until the row is inserted
    /// - `created_at = now() in ISO8601`
    pub fn new(
        job_id: i64,
        date: NaiveDate,
        crew_size: f64,
        hours: f64,
        material_cost: f64,
        notes: String,
    ) -> Self {
        Self {
            id: 0,
            job_id,
            date,
            crew_size,
            hours,
            material_cost,
            notes,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Crew-hours contributed by this report (crew_size × hours).
    pub fn crew_hours(&self) -> f64 {
        self.crew_size * self.hours
    }
}
