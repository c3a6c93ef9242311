use anyhow::Context;
use beamcore::sources::{effective_invert, Inversion, Vendor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub vendor: Option<Vendor>,
    pub inversion: Inversion,
    pub pixels_per_cm: f64,
    pub energy_mv: f64,
    pub depth_cm: f64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            vendor: None,
            inversion: Inversion::Auto,
            pixels_per_cm: 40.0,
            energy_mv: 6.0,
            depth_cm: 10.0,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        vendor: Option<&str>,
        force_invert: bool,
        pixels_per_cm: f64,
        energy_mv: f64,
        depth_cm: f64,
    ) -> Self {
        Self {
            vendor: vendor.and_then(parse_vendor),
            inversion: if force_invert {
                Inversion::Always
            } else {
                Inversion::Auto
            },
            pixels_per_cm,
            energy_mv,
            depth_cm,
        }
    }

    /// Whether image profiles are inverted before normalization: the
    /// explicit override wins, otherwise the vendor convention decides.
    pub fn effective_invert(&self) -> bool {
        effective_invert(self.vendor, self.inversion)
    }
}

/// Maps a vendor name from the command line; unknown names fall back to
/// "no vendor", leaving inversion to the explicit override only.
pub fn parse_vendor(name: &str) -> Option<Vendor> {
    match name.trim().to_ascii_lowercase().as_str() {
        "elekta" => Some(Vendor::Elekta),
        "varian" => Some(Vendor::Varian),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_resolves_vendor_inversion() {
        let cfg = WorkflowConfig::from_args(Some("Elekta"), false, 40.0, 6.0, 10.0);
        assert_eq!(cfg.vendor, Some(Vendor::Elekta));
        assert!(cfg.effective_invert());

        let cfg = WorkflowConfig::from_args(Some("varian"), false, 40.0, 6.0, 10.0);
        assert!(!cfg.effective_invert());
    }

    #[test]
    fn unknown_vendor_requires_explicit_override() {
        let cfg = WorkflowConfig::from_args(Some("acme"), false, 40.0, 6.0, 10.0);
        assert_eq!(cfg.vendor, None);
        assert!(!cfg.effective_invert());

        let cfg = WorkflowConfig::from_args(Some("acme"), true, 40.0, 6.0, 10.0);
        assert!(cfg.effective_invert());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"vendor: Elekta\npixels_per_cm: 25.0\nenergy_mv: 10.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.vendor, Some(Vendor::Elekta));
        assert_eq!(cfg.pixels_per_cm, 25.0);
        assert_eq!(cfg.depth_cm, 10.0);
    }
}
