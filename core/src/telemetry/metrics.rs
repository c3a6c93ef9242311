use std::sync::Mutex;

/// Counts analyzed and failed profiles across one driver run.
pub struct MetricsRecorder {
    inner: Mutex<Counters>,
}

struct Counters {
    analyzed: usize,
    errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                analyzed: 0,
                errors: 0,
            }),
        }
    }

    pub fn record_analyzed(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.analyzed += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.errors += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.analyzed, counters.errors)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
