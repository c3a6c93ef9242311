pub mod image;
pub mod sheet;

pub use image::{effective_invert, ImagePayload, Inversion, Vendor};
pub use sheet::{PositionUnit, SheetColumns, SheetPayload, SheetSample};

use serde::{Deserialize, Serialize};

/// The two orthogonal sampling axes of a 2-D field image, also used as the
/// sheet names of exported measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Inline,
    Crossline,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::Inline => "Inline",
            Axis::Crossline => "Crossline",
        }
    }
}
