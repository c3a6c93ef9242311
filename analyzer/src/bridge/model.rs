use crate::workflow::runner::{AnalysisReport, AxisAnalysis};
use serde::{Deserialize, Serialize};

/// Snapshot served to the external reporting collaborator: the latest
/// analyzed axes plus the run counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportModel {
    pub axes: Vec<AxisAnalysis>,
    pub analyzed: usize,
    pub errors: usize,
}

impl ReportModel {
    pub fn from_report(report: &AnalysisReport, counters: (usize, usize)) -> Self {
        Self {
            axes: report.axes.clone(),
            analyzed: counters.0,
            errors: counters.1,
        }
    }

    pub fn from_axis(axis: AxisAnalysis, counters: (usize, usize)) -> Self {
        Self {
            axes: vec![axis],
            analyzed: counters.0,
            errors: counters.1,
        }
    }
}
