use crate::prelude::{BeamError, BeamResult};
use crate::profile::{Profile, ProfileOptions};
use crate::sources::Axis;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Linac vendor greyscale conventions. Elekta EPID exports carry inverted
/// intensity (high values outside the field), Varian exports do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vendor {
    Elekta,
    Varian,
}

impl Vendor {
    pub fn inverts_profile(self) -> bool {
        matches!(self, Vendor::Elekta)
    }
}

/// Explicit inversion override, independent of the vendor default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Inversion {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolves the inversion actually applied: an explicit override wins,
/// otherwise the vendor convention decides, otherwise raw intensities.
pub fn effective_invert(vendor: Option<Vendor>, inversion: Inversion) -> bool {
    match inversion {
        Inversion::Always => true,
        Inversion::Never => false,
        Inversion::Auto => vendor.map(Vendor::inverts_profile).unwrap_or(false),
    }
}

/// Decoded 2-D field image handed over by the acquisition collaborator,
/// with its source resolution in pixels per cm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    pub pixels: Array2<f32>,
    pub pixels_per_cm: f64,
}

impl ImagePayload {
    pub fn new(pixels: Array2<f32>, pixels_per_cm: f64) -> Self {
        Self {
            pixels,
            pixels_per_cm,
        }
    }

    /// Raw samples along the requested centerline: the middle row for
    /// inline, the middle column for crossline.
    pub fn centerline(&self, axis: Axis) -> BeamResult<Vec<f64>> {
        let (height, width) = self.pixels.dim();
        if height == 0 || width == 0 {
            return Err(BeamError::InvalidInput(format!(
                "empty image: {}x{}",
                height, width
            )));
        }

        let samples = match axis {
            Axis::Inline => self
                .pixels
                .row(height / 2)
                .iter()
                .map(|&v| f64::from(v))
                .collect(),
            Axis::Crossline => self
                .pixels
                .column(width / 2)
                .iter()
                .map(|&v| f64::from(v))
                .collect(),
        };
        Ok(samples)
    }

    /// Builds the centered, normalized profile for one axis.
    pub fn profile(&self, axis: Axis, invert: bool) -> BeamResult<Profile> {
        let samples = self.centerline(axis)?;
        let options = ProfileOptions {
            invert,
            samples_per_unit: self.pixels_per_cm,
            normalization: None,
        };
        Profile::from_raw(&samples, &options)
    }
}
