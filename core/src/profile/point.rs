use serde::{Deserialize, Serialize};

/// One dose sample: centerline-relative position and normalized intensity.
///
/// `slope` is the rise toward the *next* point in the profile and stays
/// `None` for the last point (and for every point until the scan pass runs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
}

impl ProfilePoint {
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self {
            index,
            x,
            y,
            slope: None,
        }
    }

    /// Slope from this sample to `next`. A vertical pair (dx = 0) maps to
    /// positive infinity rather than a division error.
    pub fn slope_to(&self, next: &ProfilePoint) -> f64 {
        let dx = next.x - self.x;
        let dy = next.y - self.y;
        if dx != 0.0 {
            dy / dx
        } else {
            f64::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_to_handles_vertical_pair() {
        let a = ProfilePoint::new(0, 1.0, 10.0);
        let b = ProfilePoint::new(1, 1.0, 90.0);
        assert_eq!(a.slope_to(&b), f64::INFINITY);
    }

    #[test]
    fn slope_to_computes_rise_over_run() {
        let a = ProfilePoint::new(0, 0.0, 0.0);
        let b = ProfilePoint::new(1, 2.0, 100.0);
        assert_eq!(a.slope_to(&b), 50.0);
    }
}
