use crate::profile::Profile;
use serde::{Deserialize, Serialize};

/// Which half of the profile a crossing search runs on. The centerline
/// sample (x = 0) belongs to neither side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Negative,
    Positive,
}

impl Side {
    pub fn contains(self, x: f64) -> bool {
        match self {
            Side::Negative => x < 0.0,
            Side::Positive => x > 0.0,
        }
    }
}

/// Finds the position whose sample intensity lies closest to `target_y`
/// among the points on the requested side.
///
/// This is a nearest-by-intensity sample match, not an interpolation: the
/// result snaps to an existing sample position, with resolution bounded by
/// the sample spacing. Ties keep the first point in left-to-right order.
/// Returns positive infinity when no sample lies on the requested side;
/// callers must treat that as "undeterminable", not as a position.
pub fn predict_x(profile: &Profile, target_y: f64, side: Side) -> f64 {
    let mut best_diff = f64::INFINITY;
    let mut predicted_x = f64::INFINITY;

    for point in profile.iter() {
        let diff = (point.y - target_y).abs();
        if diff < best_diff && side.contains(point.x) {
            best_diff = diff;
            predicted_x = point.x;
        }
    }

    predicted_x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfilePoint;

    fn profile(samples: &[(f64, f64)]) -> Profile {
        Profile::from_points(
            samples
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| ProfilePoint::new(i, x, y))
                .collect(),
        )
    }

    #[test]
    fn predict_selects_nearest_intensity_on_requested_side() {
        let p = profile(&[(-2.0, 10.0), (-1.0, 55.0), (0.0, 100.0), (1.0, 48.0), (2.0, 12.0)]);
        assert_eq!(predict_x(&p, 50.0, Side::Negative), -1.0);
        assert_eq!(predict_x(&p, 50.0, Side::Positive), 1.0);
    }

    #[test]
    fn predict_excludes_the_centerline_sample() {
        let p = profile(&[(-1.0, 40.0), (0.0, 100.0), (1.0, 60.0)]);
        // x = 0 is the best intensity match for 100 but sits on neither side.
        assert_eq!(predict_x(&p, 100.0, Side::Positive), 1.0);
    }

    #[test]
    fn predict_ties_keep_the_first_point_in_order() {
        let p = profile(&[(1.0, 50.0), (2.0, 50.0), (3.0, 50.0)]);
        assert_eq!(predict_x(&p, 50.0, Side::Positive), 1.0);
    }

    #[test]
    fn predict_returns_sentinel_for_empty_side() {
        let p = profile(&[(1.0, 10.0), (2.0, 90.0)]);
        assert_eq!(predict_x(&p, 50.0, Side::Negative), f64::INFINITY);
    }

    #[test]
    fn predict_is_idempotent() {
        let p = profile(&[(-1.0, 30.0), (1.0, 70.0), (2.0, 40.0)]);
        let first = predict_x(&p, 45.0, Side::Positive);
        let second = predict_x(&p, 45.0, Side::Positive);
        assert_eq!(first, second);
    }
}
