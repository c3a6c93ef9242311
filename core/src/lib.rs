//! Profile-analysis core for the Rust beam-symmetry QA platform.
//!
//! The modules mirror the legacy AERB field-analysis pipeline while providing
//! a single source-agnostic algorithm, per-call extremum state, and typed
//! errors instead of the triplicated per-source implementations.

pub mod analysis;
pub mod prelude;
pub mod profile;
pub mod sources;
pub mod telemetry;

pub use analysis::{analyze, BeamMetrics, Side};
pub use prelude::{BeamError, BeamResult};
pub use profile::{Profile, ProfileOptions, ProfilePoint};
