// src/state/dashboard.rs
use crate::report::{Prediction, PredictionReport};
use crate::store::ReportStore;

/// Illustrative temperature series for the dashboard chart. The service
/// does not return an aggregate series yet, so the chart keeps the
/// placeholder values the web client shipped with.
pub const DEMO_DATES: [&str; 5] = [
    "2020-08-01",
    "2020-08-02",
    "2020-08-03",
    "2020-08-04",
    "2020-08-05",
];
pub const DEMO_TEMPS: [f64; 5] = [36.2, 45.6, 109.4, 190.0, 243.1];

const CALENDAR_LIMIT: usize = 5;

/// Snapshot of the cache slot taken when the user navigates to the
/// dashboard; the screen is a pure function of this snapshot.
pub struct DashboardView {
    report: Option<PredictionReport>,
}

impl DashboardView {
    pub fn load(store: &dyn ReportStore) -> Self {
        Self {
            report: store.load(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.report.is_some()
    }

    /// At most the first five calendar entries.
    pub fn calendar(&self) -> &[Prediction] {
        match &self.report {
            Some(report) => {
                let n = report.predictions.len().min(CALENDAR_LIMIT);
                &report.predictions[..n]
            }
            None => &[],
        }
    }

    pub fn summary_total(&self) -> String {
        let total = self.report.as_ref().map(|r| r.total).unwrap_or(0);
        format!("Всего прогнозов: {}", total)
    }

    pub fn summary_high_risk(&self) -> String {
        let high_risk = self.report.as_ref().map(|r| r.high_risk).unwrap_or(0);
        format!("Высокий риск: {}", high_risk)
    }

    pub fn demo_series(&self) -> Vec<[f64; 2]> {
        DEMO_TEMPS
            .iter()
            .enumerate()
            .map(|(i, temp)| [i as f64, *temp])
            .collect()
    }
}
