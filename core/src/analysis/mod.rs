pub mod metrics;
pub mod predict;
pub mod reference;
pub mod slope;

pub use metrics::BeamMetrics;
pub use predict::{predict_x, Side};
pub use reference::reference_dose;
pub use slope::{scan_slopes, SlopeExtrema};

use crate::prelude::BeamResult;
use crate::profile::Profile;

/// Runs the full symmetry analysis on one profile axis.
///
/// Scans the pairwise slopes, derives the reference dose value from the two
/// steepest edges, then locates the nearest-sample crossings for the
/// 1.6/0.4 reference bands and the 90/75/60% dose levels on both sides of
/// the centerline. Crossings that fall on a side with no samples come back
/// as non-finite values; see [`BeamMetrics::degenerate_entries`].
pub fn analyze(profile: &mut Profile) -> BeamResult<BeamMetrics> {
    let extrema = scan_slopes(profile)?;
    let rdv = reference_dose(&extrema);

    let upper_y = rdv * 1.6;
    let lower_y = rdv * 0.4;

    let neg_upper_x = predict_x(profile, upper_y, Side::Negative);
    let pos_upper_x = predict_x(profile, upper_y, Side::Positive);

    let neg_lower_x = predict_x(profile, lower_y, Side::Negative);
    let pos_lower_x = predict_x(profile, lower_y, Side::Positive);

    let neg_avg_x = predict_x(profile, rdv, Side::Negative);
    let pos_avg_x = predict_x(profile, rdv, Side::Positive);

    let neg_x90 = predict_x(profile, 90.0, Side::Negative);
    let pos_x90 = predict_x(profile, 90.0, Side::Positive);

    let neg_x75 = predict_x(profile, 75.0, Side::Negative);
    let pos_x75 = predict_x(profile, 75.0, Side::Positive);

    let neg_x60 = predict_x(profile, 60.0, Side::Negative);
    let pos_x60 = predict_x(profile, 60.0, Side::Positive);

    Ok(BeamMetrics {
        max_slope: extrema.max_slope,
        min_slope: extrema.min_slope,
        reference_dose: rdv,
        penumbra_left_upper_x: neg_upper_x,
        penumbra_left_lower_x: neg_lower_x,
        penumbra_left_mm: (neg_lower_x - neg_upper_x).abs() * 10.0,
        penumbra_right_upper_x: pos_upper_x,
        penumbra_right_lower_x: pos_lower_x,
        penumbra_right_mm: (pos_lower_x - pos_upper_x).abs() * 10.0,
        inflection_left_x: neg_avg_x,
        inflection_right_x: pos_avg_x,
        field_size_mm: (pos_avg_x - neg_avg_x) * 10.0,
        x90_negative: neg_x90,
        x90_positive: pos_x90,
        // Width metrics stay in the native position unit; only penumbra and
        // field size carry the x10 worksheet scaling.
        width_90: pos_x90 - neg_x90,
        x75_negative: neg_x75,
        x75_positive: pos_x75,
        width_75: pos_x75 - neg_x75,
        x60_negative: neg_x60,
        x60_positive: pos_x60,
        width_60: pos_x60 - neg_x60,
    })
}
