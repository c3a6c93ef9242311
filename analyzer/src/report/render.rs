use crate::workflow::runner::AnalysisReport;
use anyhow::Context;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Renders the parameter/value tables for every analyzed axis. The two
/// diagnostic slope values stay out of the table; non-finite values are
/// printed as `undeterminable` instead of a number.
pub fn render_table(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Energy(MV)= {}", report.energy_mv);
    let _ = writeln!(out, "Depth(cm)= {}", report.depth_cm);
    let _ = writeln!(out, "Inverted= {}", report.inverted);

    for axis in &report.axes {
        let _ = writeln!(out, "\n--- Beam Profile {} ---", axis.axis.label());
        for (key, value) in axis.metrics.table_entries() {
            if value.is_finite() {
                let _ = writeln!(out, "{:<20} {:>12.2}", key, value);
            } else {
                let _ = writeln!(out, "{:<20} {:>12}", key, "undeterminable");
            }
        }
        if !axis.flagged.is_empty() {
            let _ = writeln!(out, "flagged: {}", axis.flagged.join(", "));
        }
    }
    out
}

/// Writes the full report, diagnostic slopes included, as pretty JSON.
pub fn write_json(report: &AnalysisReport, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing analysis report")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }
    fs::write(path, json).with_context(|| format!("writing report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::phantom::{build_phantom_image, PhantomConfig};
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;

    fn sample_report() -> AnalysisReport {
        let payload = build_phantom_image(&PhantomConfig::default()).unwrap();
        Runner::new(WorkflowConfig::default())
            .analyze_image(&payload)
            .unwrap()
    }

    #[test]
    fn table_hides_diagnostic_slopes() {
        let table = render_table(&sample_report());
        assert!(table.contains("RDV"));
        assert!(table.contains("Field size(mm)"));
        assert!(table.contains("Beam Profile Inline"));
        assert!(table.contains("Beam Profile Crossline"));
        assert!(!table.contains("max_slope"));
    }

    #[test]
    fn json_report_round_trips() {
        let report = sample_report();
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.json");
        write_json(&report, &path).unwrap();
        let back: AnalysisReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.axes.len(), report.axes.len());
        assert_eq!(
            back.axes[0].metrics.reference_dose,
            report.axes[0].metrics.reference_dose
        );
    }
}
