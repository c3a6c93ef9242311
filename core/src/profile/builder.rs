use crate::prelude::{BeamError, BeamResult};
use crate::profile::{Profile, ProfilePoint};
use serde::{Deserialize, Serialize};

/// Choices a data source makes when turning a raw sample row into a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    /// Invert intensities (`max(raw) - raw`) before normalization. Vendor
    /// greyscale conventions differ; see `sources::image`.
    pub invert: bool,
    /// Samples per position unit, e.g. 40 pixels per cm for an EPID row.
    /// A property of the data source, never of the algorithm.
    pub samples_per_unit: f64,
    /// Normalization reference. Defaults to the row's own maximum.
    pub normalization: Option<f64>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            invert: false,
            samples_per_unit: 1.0,
            normalization: None,
        }
    }
}

impl Profile {
    /// Builds a centered, normalized profile from a raw sample row.
    ///
    /// Positions run evenly from `-half` to `+half` (`half = len / 2`) in
    /// index units, then divide by `samples_per_unit`. Intensities are
    /// scaled so the normalization reference maps to 100; a reference of 0
    /// is substituted with 1.0, so an all-zero row stays all-zero instead
    /// of producing NaN.
    pub fn from_raw(samples: &[f64], options: &ProfileOptions) -> BeamResult<Self> {
        if options.samples_per_unit <= 0.0 {
            return Err(BeamError::InvalidInput(format!(
                "samples_per_unit must be positive, got {}",
                options.samples_per_unit
            )));
        }

        let mut values: Vec<f64> = samples.to_vec();
        if options.invert {
            let max_raw = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            for value in &mut values {
                *value = max_raw - *value;
            }
        }

        let reference = match options.normalization {
            Some(reference) if reference != 0.0 => reference,
            Some(_) => 1.0,
            None => {
                let max_value = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                if max_value != 0.0 && max_value.is_finite() {
                    max_value
                } else {
                    1.0
                }
            }
        };

        let len = values.len();
        let half = (len / 2) as f64;
        let step = if len > 1 {
            2.0 * half / (len - 1) as f64
        } else {
            0.0
        };

        let points = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let x = (-half + index as f64 * step) / options.samples_per_unit;
                let y = value / reference * 100.0;
                ProfilePoint::new(index, x, y)
            })
            .collect();

        Ok(Profile::from_points(points))
    }
}
