use chrono::Local;
use serde::Serialize;

/// A contracted unit of construction work with its estimated cost parameters.
/// Created once via `jobcost job`; immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: i64,
    pub job_name: String,          // ⇔ jobs.job_name (TEXT)
    pub job_number: String,        // ⇔ jobs.job_number (TEXT)
    pub client: String,            // ⇔ jobs.client (TEXT, free text)
    pub contract_amount: f64,      // ⇔ jobs.contract_amount (REAL, >= 0)
    pub est_labor_hours: f64,      // ⇔ jobs.est_labor_hours (REAL, >= 0)
    pub est_material_cost: f64,    // ⇔ jobs.est_material_cost (REAL, >= 0)
    pub created_at: String,        // ⇔ jobs.created_at (TEXT, ISO8601)
}

impl Job {
    /// High-level constructor for jobs created from the CLI.
    /// - `id = 0` until the row is inserted (SQLite assigns the rowid)
    /// - `created_at = now() in ISO8601`
    pub fn new(
        job_name: String,
        job_number: String,
        client: String,
        contract_amount: f64,
        est_labor_hours: f64,
        est_material_cost: f64,
    ) -> Self {
        Self {
            id: 0,
            job_name,
            job_number,
            client,
            contract_amount,
            est_labor_hours,
            est_material_cost,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Short "number - name" label used in listings and summary headers.
    pub fn label(&self) -> String {
        if self.job_number.is_empty() {
            self.job_name.clone()
        } else {
            format!("{} - {}", self.job_number, self.job_name)
        }
    }
}
