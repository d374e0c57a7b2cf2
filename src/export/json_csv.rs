use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportExport, get_headers, report_to_row};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

/// Write the report rows as CSV.
pub(crate) fn export_csv(reports: &[ReportExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for r in reports {
        wtr.write_record(report_to_row(r))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write the report rows as pretty-printed JSON.
pub(crate) fn export_json(reports: &[ReportExport], path: &Path) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(reports).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
