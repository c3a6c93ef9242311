use serde::{Deserialize, Serialize};

/// Full symmetry-metrics record for one profile axis.
///
/// Field order follows the worksheet layout: reference value, the six raw
/// crossing positions, penumbra and field size in mm (the x10 scaling), and
/// the 90/75/60% widths in the native position unit. The two slope values
/// are diagnostics only and stay out of tabular rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamMetrics {
    pub max_slope: f64,
    pub min_slope: f64,
    pub reference_dose: f64,
    pub penumbra_left_upper_x: f64,
    pub penumbra_left_lower_x: f64,
    pub penumbra_left_mm: f64,
    pub penumbra_right_upper_x: f64,
    pub penumbra_right_lower_x: f64,
    pub penumbra_right_mm: f64,
    pub inflection_left_x: f64,
    pub inflection_right_x: f64,
    pub field_size_mm: f64,
    pub x90_negative: f64,
    pub x90_positive: f64,
    pub width_90: f64,
    pub x75_negative: f64,
    pub x75_positive: f64,
    pub width_75: f64,
    pub x60_negative: f64,
    pub x60_positive: f64,
    pub width_60: f64,
}

/// Report labels hidden from end-user tables by convention.
const DIAGNOSTIC_KEYS: [&str; 2] = ["max_slope", "min_slope"];

impl BeamMetrics {
    /// Every metric with its worksheet label, in the fixed report order.
    pub fn entries(&self) -> [(&'static str, f64); 21] {
        [
            ("max_slope", self.max_slope),
            ("min_slope", self.min_slope),
            ("RDV", self.reference_dose),
            ("PLu", self.penumbra_left_upper_x),
            ("PLd", self.penumbra_left_lower_x),
            ("Penumbra_Left(mm)", self.penumbra_left_mm),
            ("PRu", self.penumbra_right_upper_x),
            ("PRd", self.penumbra_right_lower_x),
            ("Penumbra_Right(mm)", self.penumbra_right_mm),
            ("IPL", self.inflection_left_x),
            ("IPR", self.inflection_right_x),
            ("Field size(mm)", self.field_size_mm),
            ("90-", self.x90_negative),
            ("90+", self.x90_positive),
            ("X90%", self.width_90),
            ("75-", self.x75_negative),
            ("75+", self.x75_positive),
            ("X75%", self.width_75),
            ("60-", self.x60_negative),
            ("60+", self.x60_positive),
            ("X60%", self.width_60),
        ]
    }

    /// The entries rendered in end-user tables: everything except the two
    /// diagnostic slope values.
    pub fn table_entries(&self) -> Vec<(&'static str, f64)> {
        self.entries()
            .into_iter()
            .filter(|(key, _)| !DIAGNOSTIC_KEYS.contains(key))
            .collect()
    }

    /// Labels whose values came out non-finite, i.e. derived from the
    /// "no sample on this side" sentinel. These must be reported as
    /// undeterminable, never as physical distances.
    pub fn degenerate_entries(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|&(_, value)| !value.is_finite())
            .map(|(key, _)| key)
            .collect()
    }

    pub fn is_determinate(&self) -> bool {
        self.degenerate_entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BeamMetrics {
        BeamMetrics {
            max_slope: 50.0,
            min_slope: -50.0,
            reference_dose: 50.0,
            penumbra_left_upper_x: -1.0,
            penumbra_left_lower_x: -2.0,
            penumbra_left_mm: 10.0,
            penumbra_right_upper_x: 1.0,
            penumbra_right_lower_x: 2.0,
            penumbra_right_mm: 10.0,
            inflection_left_x: -1.0,
            inflection_right_x: 1.0,
            field_size_mm: 20.0,
            x90_negative: -0.5,
            x90_positive: 0.5,
            width_90: 1.0,
            x75_negative: -0.7,
            x75_positive: 0.7,
            width_75: 1.4,
            x60_negative: -0.9,
            x60_positive: 0.9,
            width_60: 1.8,
        }
    }

    #[test]
    fn entries_keep_worksheet_order() {
        let entries = sample().entries();
        assert_eq!(entries[0].0, "max_slope");
        assert_eq!(entries[2].0, "RDV");
        assert_eq!(entries[11], ("Field size(mm)", 20.0));
        assert_eq!(entries[20].0, "X60%");
    }

    #[test]
    fn table_entries_hide_diagnostic_slopes() {
        let table = sample().table_entries();
        assert_eq!(table.len(), 19);
        assert!(table.iter().all(|(key, _)| *key != "max_slope"));
        assert_eq!(table[0].0, "RDV");
    }

    #[test]
    fn degenerate_entries_flag_sentinel_values() {
        let mut metrics = sample();
        assert!(metrics.is_determinate());
        metrics.inflection_left_x = f64::INFINITY;
        metrics.field_size_mm = f64::NAN;
        let flagged = metrics.degenerate_entries();
        assert_eq!(flagged, vec!["IPL", "Field size(mm)"]);
        assert!(!metrics.is_determinate());
    }

    #[test]
    fn metrics_round_trip_through_json() {
        let metrics = sample();
        let json = serde_json::to_string(&metrics).unwrap();
        let back: BeamMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
