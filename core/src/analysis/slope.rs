use crate::prelude::{BeamError, BeamResult};
use crate::profile::Profile;

/// Slope extrema of one scan pass, scoped to a single analysis call.
///
/// `y_at_max`/`y_at_min` are the intensities of the *successor* samples of
/// the steepest rising and falling pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeExtrema {
    pub max_slope: f64,
    pub min_slope: f64,
    pub y_at_max: f64,
    pub y_at_min: f64,
}

/// Walks consecutive sample pairs, stores each pair's slope on its left
/// point, and tracks the global slope extrema. Strict comparisons keep the
/// first extremum encountered in scan order on ties.
pub fn scan_slopes(profile: &mut Profile) -> BeamResult<SlopeExtrema> {
    if profile.len() < 2 {
        return Err(BeamError::TooFewSamples(profile.len()));
    }

    let mut max_slope = f64::NEG_INFINITY;
    let mut min_slope = f64::INFINITY;
    let mut y_at_max = 0.0;
    let mut y_at_min = 0.0;

    let points = profile.points_mut();
    for i in 0..points.len() - 1 {
        let next = points[i + 1];
        let slope = points[i].slope_to(&next);
        points[i].slope = Some(slope);

        if slope > max_slope {
            max_slope = slope;
            y_at_max = next.y;
        }
        if slope < min_slope {
            min_slope = slope;
            y_at_min = next.y;
        }
    }

    Ok(SlopeExtrema {
        max_slope,
        min_slope,
        y_at_max,
        y_at_min,
    })
}
