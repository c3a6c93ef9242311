use crate::prelude::{BeamError, BeamResult};
use crate::profile::{Profile, ProfilePoint};
use crate::sources::Axis;
use serde::{Deserialize, Serialize};

/// Position unit of an exported measurement column. Millimeter columns are
/// converted to cm at ingest so a profile carries one unit throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionUnit {
    Cm,
    Mm,
}

impl PositionUnit {
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            PositionUnit::Cm => value,
            PositionUnit::Mm => value / 10.0,
        }
    }
}

/// Column layout resolved from a measurement sheet's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetColumns {
    pub position: usize,
    pub unit: PositionUnit,
    pub dose: usize,
}

impl SheetColumns {
    /// Picks the `<Axis>(cm)` or `<Axis>(mm)` position column and the
    /// `Dose(%)` column, failing before any computation when either is
    /// absent.
    pub fn resolve(headers: &[String], axis: Axis) -> BeamResult<Self> {
        let cm_name = format!("{}(cm)", axis.label());
        let mm_name = format!("{}(mm)", axis.label());

        let find = |name: &str| headers.iter().position(|header| header == name);

        let (position, unit) = if let Some(index) = find(&cm_name) {
            (index, PositionUnit::Cm)
        } else if let Some(index) = find(&mm_name) {
            (index, PositionUnit::Mm)
        } else {
            return Err(BeamError::MissingColumn(format!(
                "'{}' or '{}' not found in the {} sheet",
                cm_name,
                mm_name,
                axis.label()
            )));
        };

        let dose = find("Dose(%)").ok_or_else(|| {
            BeamError::MissingColumn(format!(
                "'Dose(%)' not found in the {} sheet",
                axis.label()
            ))
        })?;

        Ok(Self {
            position,
            unit,
            dose,
        })
    }
}

/// One measurement row: position in the sheet's own unit, dose in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSample {
    pub position: f64,
    pub dose: f64,
}

/// Measurement-sheet payload for one axis. Dose values arrive already
/// normalized to percent, so no renormalization happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPayload {
    pub axis: Axis,
    pub unit: PositionUnit,
    pub samples: Vec<SheetSample>,
}

impl SheetPayload {
    pub fn to_profile(&self) -> BeamResult<Profile> {
        if self.samples.len() < 2 {
            return Err(BeamError::TooFewSamples(self.samples.len()));
        }
        let points = self
            .samples
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                ProfilePoint::new(index, self.unit.to_cm(sample.position), sample.dose)
            })
            .collect();
        Ok(Profile::from_points(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolve_prefers_the_cm_column() {
        let columns = SheetColumns::resolve(
            &headers(&["Inline(cm)", "Inline(mm)", "Dose(%)"]),
            Axis::Inline,
        )
        .unwrap();
        assert_eq!(columns.position, 0);
        assert_eq!(columns.unit, PositionUnit::Cm);
        assert_eq!(columns.dose, 2);
    }

    #[test]
    fn resolve_falls_back_to_the_mm_column() {
        let columns =
            SheetColumns::resolve(&headers(&["Crossline(mm)", "Dose(%)"]), Axis::Crossline)
                .unwrap();
        assert_eq!(columns.unit, PositionUnit::Mm);
    }

    #[test]
    fn resolve_reports_missing_columns() {
        let err = SheetColumns::resolve(&headers(&["Dose(%)"]), Axis::Inline).unwrap_err();
        assert!(matches!(err, BeamError::MissingColumn(_)));
        let err = SheetColumns::resolve(&headers(&["Inline(cm)"]), Axis::Inline).unwrap_err();
        assert!(err.to_string().contains("Dose(%)"));
    }

    #[test]
    fn payload_converts_mm_positions_to_cm() {
        let payload = SheetPayload {
            axis: Axis::Inline,
            unit: PositionUnit::Mm,
            samples: vec![
                SheetSample {
                    position: -20.0,
                    dose: 10.0,
                },
                SheetSample {
                    position: 0.0,
                    dose: 100.0,
                },
                SheetSample {
                    position: 20.0,
                    dose: 10.0,
                },
            ],
        };
        let profile = payload.to_profile().unwrap();
        assert_eq!(profile.points()[0].x, -2.0);
        assert_eq!(profile.points()[2].x, 2.0);
        assert_eq!(profile.points()[1].y, 100.0);
    }

    #[test]
    fn payload_rejects_single_row_sheets() {
        let payload = SheetPayload {
            axis: Axis::Crossline,
            unit: PositionUnit::Cm,
            samples: vec![SheetSample {
                position: 0.0,
                dose: 100.0,
            }],
        };
        assert!(payload.to_profile().is_err());
    }
}
