use anyhow::ensure;
use beamcore::sources::ImagePayload;
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic square-field image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhantomConfig {
    /// Image edge length in pixels (square image).
    pub size: usize,
    pub field_width_cm: f64,
    /// Width of the linear shoulder at each field edge.
    pub penumbra_cm: f64,
    pub pixels_per_cm: f64,
    pub peak: f32,
    pub noise: f32,
    pub seed: u64,
    /// Emit Elekta-style inverted greyscale.
    pub inverted: bool,
}

impl Default for PhantomConfig {
    fn default() -> Self {
        Self {
            size: 401,
            field_width_cm: 10.0,
            penumbra_cm: 0.5,
            pixels_per_cm: 20.0,
            peak: 1000.0,
            noise: 2.0,
            seed: 0,
            inverted: false,
        }
    }
}

/// Trapezoid edge factor: 1 inside the field, 0 outside, linear across the
/// shoulder centered on the nominal field edge.
fn edge_factor(distance_cm: f64, config: &PhantomConfig) -> f64 {
    let half_field = config.field_width_cm / 2.0;
    let shoulder = config.penumbra_cm.max(f64::EPSILON);
    ((half_field + shoulder / 2.0 - distance_cm.abs()) / shoulder).clamp(0.0, 1.0)
}

/// Builds a square open-field image with linear shoulders and seeded noise.
pub fn build_phantom_image(config: &PhantomConfig) -> anyhow::Result<ImagePayload> {
    ensure!(config.size >= 3, "phantom image needs at least 3x3 pixels");
    ensure!(
        config.pixels_per_cm > 0.0,
        "pixels_per_cm must be positive, got {}",
        config.pixels_per_cm
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let half = (config.size / 2) as f64;
    let mut pixels = Array2::<f32>::zeros((config.size, config.size));

    for ((row, col), value) in pixels.indexed_iter_mut() {
        let y_cm = (row as f64 - half) / config.pixels_per_cm;
        let x_cm = (col as f64 - half) / config.pixels_per_cm;
        let dose = f64::from(config.peak) * edge_factor(x_cm, config) * edge_factor(y_cm, config);
        let jitter = if config.noise > 0.0 {
            rng.gen_range(-config.noise..config.noise)
        } else {
            0.0
        };
        let sample = (dose as f32 + jitter).max(0.0);
        *value = if config.inverted {
            config.peak - sample
        } else {
            sample
        };
    }

    Ok(ImagePayload::new(pixels, config.pixels_per_cm))
}

/// Default phantom at the given source resolution.
pub fn build_phantom_payload(pixels_per_cm: f64) -> anyhow::Result<ImagePayload> {
    let config = PhantomConfig {
        pixels_per_cm,
        ..Default::default()
    };
    build_phantom_image(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phantom_peaks_at_the_center() {
        let config = PhantomConfig {
            noise: 0.0,
            ..Default::default()
        };
        let payload = build_phantom_image(&config).unwrap();
        let center = payload.pixels[(200, 200)];
        let corner = payload.pixels[(0, 0)];
        assert_eq!(center, 1000.0);
        assert_eq!(corner, 0.0);
    }

    #[test]
    fn inverted_phantom_flips_greyscale() {
        let config = PhantomConfig {
            noise: 0.0,
            inverted: true,
            ..Default::default()
        };
        let payload = build_phantom_image(&config).unwrap();
        assert_eq!(payload.pixels[(200, 200)], 0.0);
        assert_eq!(payload.pixels[(0, 0)], 1000.0);
    }

    #[test]
    fn phantom_rejects_degenerate_sizes() {
        let config = PhantomConfig {
            size: 1,
            ..Default::default()
        };
        assert!(build_phantom_image(&config).is_err());
    }
}
