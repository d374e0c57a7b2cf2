//! Cost calculator: the estimate-vs-actual arithmetic for one job.
//!
//! Pure computation over values already loaded from the DB. No side effects,
//! no state between calls. Reports are an unordered collection; every formula
//! here is order-independent.

use crate::models::cost_summary::CostSummary;
use crate::models::daily_report::DailyReport;
use crate::models::job::Job;

/// Percentage of `actual` against `estimate`, or 0 when there is no estimate
/// to compare against (never a division error).
fn percent_of(actual: f64, estimate: f64) -> f64 {
    if estimate > 0.0 {
        (actual / estimate) * 100.0
    } else {
        0.0
    }
}

/// Compute the full cost summary for a job and its daily reports.
pub fn cost_summary(job: &Job, reports: &[DailyReport], labor_rate: f64) -> CostSummary {
    // -----------------------------
    // Actuals from the field reports
    // -----------------------------
    let total_hours: f64 = reports.iter().map(|r| r.crew_hours()).sum();
    let total_labor_cost = total_hours * labor_rate;
    let total_material_cost: f64 = reports.iter().map(|r| r.material_cost).sum();
    let total_actual_cost = total_labor_cost + total_material_cost;

    // -----------------------------
    // Estimate from the contract parameters
    // -----------------------------
    let est_labor_cost = job.est_labor_hours * labor_rate;
    let est_total_cost = est_labor_cost + job.est_material_cost;

    let est_margin = job.contract_amount - est_total_cost;
    let actual_margin = job.contract_amount - total_actual_cost;

    CostSummary {
        labor_rate,
        total_hours,
        total_labor_cost,
        total_material_cost,
        total_actual_cost,
        est_labor_cost,
        est_total_cost,
        est_margin,
        actual_margin,
        percent_used: percent_of(total_actual_cost, est_total_cost),
        labor_percent_used: percent_of(total_labor_cost, est_labor_cost),
        material_percent_used: percent_of(total_material_cost, job.est_material_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job(contract: f64, est_hours: f64, est_material: f64) -> Job {
        Job::new(
            "Warehouse shell".to_string(),
            "24-117".to_string(),
            "Acme Builders".to_string(),
            contract,
            est_hours,
            est_material,
        )
    }

    fn report(crew: f64, hours: f64, material: f64) -> DailyReport {
        DailyReport::new(
            1,
            NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
            crew,
            hours,
            material,
            String::new(),
        )
    }

    #[test]
    fn no_reports_means_zero_actuals() {
        let s = cost_summary(&job(2000.0, 10.0, 500.0), &[], 55.0);

        assert_eq!(s.total_hours, 0.0);
        assert_eq!(s.total_labor_cost, 0.0);
        assert_eq!(s.total_material_cost, 0.0);
        assert_eq!(s.total_actual_cost, 0.0);
        // the whole contract is still on the table
        assert_eq!(s.actual_margin, 2000.0);
    }

    #[test]
    fn zero_estimate_yields_zero_percent_not_an_error() {
        let s = cost_summary(&job(1000.0, 0.0, 0.0), &[report(2.0, 4.0, 100.0)], 55.0);

        assert_eq!(s.est_total_cost, 0.0);
        assert_eq!(s.percent_used, 0.0);
        assert_eq!(s.labor_percent_used, 0.0);
        assert_eq!(s.material_percent_used, 0.0);
    }

    #[test]
    fn margin_identity_holds() {
        let j = job(123_456.78, 321.5, 9876.54);
        let s = cost_summary(&j, &[report(3.0, 7.5, 250.0)], 55.0);

        assert!((s.est_margin + s.est_total_cost - j.contract_amount).abs() < 1e-9);
    }

    #[test]
    fn worked_example_at_rate_55() {
        let s = cost_summary(&job(2000.0, 10.0, 500.0), &[report(2.0, 4.0, 100.0)], 55.0);

        assert_eq!(s.labor_rate, 55.0);
        assert_eq!(s.total_hours, 8.0);
        assert_eq!(s.total_labor_cost, 440.0);
        assert_eq!(s.total_material_cost, 100.0);
        assert_eq!(s.total_actual_cost, 540.0);
        assert_eq!(s.est_labor_cost, 550.0);
        assert_eq!(s.est_total_cost, 1050.0);
        assert_eq!(s.est_margin, 950.0);
        assert_eq!(s.actual_margin, 1460.0);
        assert!((s.percent_used - 51.428_571_428_571_43).abs() < 1e-9);
        assert_eq!(s.labor_percent_used, 80.0);
        assert_eq!(s.material_percent_used, 20.0);
    }

    #[test]
    fn fractional_crew_sizes_are_allowed() {
        // a half-day foreman counts as 0.5 crew
        let s = cost_summary(
            &job(5000.0, 40.0, 0.0),
            &[report(2.5, 8.0, 0.0), report(0.5, 4.0, 0.0)],
            55.0,
        );

        assert_eq!(s.total_hours, 22.0);
        assert_eq!(s.total_labor_cost, 1210.0);
    }

    #[test]
    fn summary_is_order_independent() {
        let j = job(9000.0, 50.0, 2000.0);
        let a = report(2.0, 8.0, 300.0);
        let b = report(3.0, 6.0, 450.0);

        let fwd = cost_summary(&j, &[a.clone(), b.clone()], 55.0);
        let rev = cost_summary(&j, &[b, a], 55.0);

        assert_eq!(fwd.total_actual_cost, rev.total_actual_cost);
        assert_eq!(fwd.percent_used, rev.percent_used);
    }
}
