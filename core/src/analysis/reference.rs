use crate::analysis::slope::SlopeExtrema;

/// Reference dose value: mean of the intensities at the steepest rising and
/// falling edges. An approximation of the 50% midline driven by whichever
/// two adjacent samples carry the extreme slopes, not by an interpolated
/// half-maximum crossing.
pub fn reference_dose(extrema: &SlopeExtrema) -> f64 {
    (extrema.y_at_max + extrema.y_at_min) / 2.0
}
