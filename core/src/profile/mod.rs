pub mod builder;
pub mod point;

pub use builder::ProfileOptions;
pub use point::ProfilePoint;

use serde::{Deserialize, Serialize};

/// Ordered sequence of dose samples along one axis, centered on x = 0.
///
/// Insertion order is physical sample order. Intensities are percentages
/// (0-100 after normalization); positions share one length unit per profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    points: Vec<ProfilePoint>,
}

impl Profile {
    /// Builds a profile from already-calibrated (position, dose%) pairs,
    /// e.g. rows of an exported measurement sheet.
    pub fn from_points(points: Vec<ProfilePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [ProfilePoint] {
        &mut self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfilePoint> {
        self.points.iter()
    }
}
