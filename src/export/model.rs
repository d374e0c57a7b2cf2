use serde::Serialize;

/// Flat row for daily-report exports: the report joined with its job number,
/// so a spreadsheet stands on its own without the jobs table.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub id: i64,
    pub job_id: i64,
    pub job_number: String,
    pub date: String,
    pub crew_size: f64,
    pub hours: f64,
    pub material_cost: f64,
    pub notes: String,
}

/// Header for CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "job_id",
        "job_number",
        "date",
        "crew_size",
        "hours",
        "material_cost",
        "notes",
    ]
}

pub(crate) fn report_to_row(r: &ReportExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.job_id.to_string(),
        r.job_number.clone(),
        r.date.clone(),
        r.crew_size.to_string(),
        r.hours.to_string(),
        r.material_cost.to_string(),
        r.notes.clone(),
    ]
}
