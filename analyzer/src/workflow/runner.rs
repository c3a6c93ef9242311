use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use beamcore::analysis::{analyze, BeamMetrics};
use beamcore::sources::{Axis, ImagePayload, SheetPayload};
use beamcore::telemetry::{LogManager, MetricsRecorder};
use serde::{Deserialize, Serialize};

/// Metrics for one analyzed axis, with the labels of any values that came
/// out undeterminable (no sample on the required side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisAnalysis {
    pub axis: Axis,
    pub metrics: BeamMetrics,
    pub flagged: Vec<String>,
}

/// One full workflow run: both image axes or the ingested sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub energy_mv: f64,
    pub depth_cm: f64,
    pub inverted: bool,
    pub axes: Vec<AxisAnalysis>,
}

pub struct Runner {
    config: WorkflowConfig,
    logger: LogManager,
    recorder: MetricsRecorder,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
            recorder: MetricsRecorder::new(),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Analyzes both centerline axes of a field image.
    pub fn analyze_image(&self, payload: &ImagePayload) -> anyhow::Result<AnalysisReport> {
        let invert = self.config.effective_invert();
        let mut axes = Vec::with_capacity(2);
        for axis in [Axis::Inline, Axis::Crossline] {
            axes.push(self.analyze_axis(payload, axis, invert)?);
        }
        Ok(AnalysisReport {
            energy_mv: self.config.energy_mv,
            depth_cm: self.config.depth_cm,
            inverted: invert,
            axes,
        })
    }

    /// Analyzes one ingested measurement sheet.
    pub fn analyze_sheet(&self, payload: &SheetPayload) -> anyhow::Result<AxisAnalysis> {
        let result = payload
            .to_profile()
            .and_then(|mut profile| analyze(&mut profile));
        let metrics = match result {
            Ok(metrics) => metrics,
            Err(err) => {
                self.recorder.record_error();
                return Err(err).with_context(|| {
                    format!("analyzing {} measurement sheet", payload.axis.label())
                });
            }
        };
        self.recorder.record_analyzed();
        self.note_axis(payload.axis, &metrics);
        Ok(Self::wrap(payload.axis, metrics))
    }

    fn analyze_axis(
        &self,
        payload: &ImagePayload,
        axis: Axis,
        invert: bool,
    ) -> anyhow::Result<AxisAnalysis> {
        let result = payload
            .profile(axis, invert)
            .and_then(|mut profile| analyze(&mut profile));
        let metrics = match result {
            Ok(metrics) => metrics,
            Err(err) => {
                self.recorder.record_error();
                return Err(err).with_context(|| format!("analyzing {} profile", axis.label()));
            }
        };
        self.recorder.record_analyzed();
        self.note_axis(axis, &metrics);
        Ok(Self::wrap(axis, metrics))
    }

    fn note_axis(&self, axis: Axis, metrics: &BeamMetrics) {
        self.logger.record(&format!(
            "{} RDV {:.2} field {:.2}mm",
            axis.label(),
            metrics.reference_dose,
            metrics.field_size_mm
        ));
    }

    fn wrap(axis: Axis, metrics: BeamMetrics) -> AxisAnalysis {
        let flagged = metrics
            .degenerate_entries()
            .into_iter()
            .map(str::to_string)
            .collect();
        AxisAnalysis {
            axis,
            metrics,
            flagged,
        }
    }

    pub fn counters(&self) -> (usize, usize) {
        self.recorder.snapshot()
    }
}
