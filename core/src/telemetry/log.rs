use log::{debug, log_enabled, Level};

/// Debug-level logger tagged with the component that owns it.
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }

    pub fn enabled(&self) -> bool {
        log_enabled!(Level::Debug)
    }

    pub fn record(&self, message: &str) {
        debug!("[{}] {}", self.scope, message);
    }
}
