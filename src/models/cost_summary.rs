use serde::Serialize;

/// Estimate-vs-actual cost breakdown for one job.
///
/// All eleven computed fields plus the labor rate they were computed with,
/// so the display layer never has to reach back into the config.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CostSummary {
    /// Dollars per crew-hour used for both the estimate and the actuals.
    pub labor_rate: f64,

    // --- actuals, summed over the job's daily reports ---
    pub total_hours: f64,
    pub total_labor_cost: f64,
    pub total_material_cost: f64,
    pub total_actual_cost: f64,

    // --- estimate, derived from the job's contract parameters ---
    pub est_labor_cost: f64,
    pub est_total_cost: f64,

    // --- margins ---
    pub est_margin: f64,
    pub actual_margin: f64,

    // --- burn percentages (0 when the matching estimate is 0) ---
    pub percent_used: f64,
    pub labor_percent_used: f64,
    pub material_percent_used: f64,
}
