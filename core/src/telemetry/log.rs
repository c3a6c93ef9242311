use log::info;

/// Thin wrapper over the `log` facade used by the workflow layer. The
/// analysis math itself stays free of logging side effects.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
