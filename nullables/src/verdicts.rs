//! Canned verdict reports — a deterministic stand-in for the AI service.

use std::sync::Mutex;
use tally_types::VerdictReport;

/// Returns pre-configured verdict reports in order, cycling when exhausted.
///
/// Used by tests and offline simulator runs in place of the HTTP client.
pub struct CannedVerdicts {
    reports: Mutex<Vec<VerdictReport>>,
    index: Mutex<usize>,
}

impl CannedVerdicts {
    /// Create with a sequence of reports to hand out.
    pub fn new(reports: Vec<VerdictReport>) -> Self {
        assert!(!reports.is_empty(), "need at least one canned report");
        Self {
            reports: Mutex::new(reports),
            index: Mutex::new(0),
        }
    }

    /// Create with a single report returned for every call.
    pub fn constant(report: VerdictReport) -> Self {
        Self::new(vec![report])
    }

    /// The next canned report.
    pub fn next_report(&self) -> VerdictReport {
        let reports = self.reports.lock().unwrap();
        let mut idx = self.index.lock().unwrap();
        let current = *idx % reports.len();
        *idx += 1;
        reports[current].clone()
    }
}
