//! # LogWriter — simple message logger
//!
//! A minimal observer that emits every received message as a `tracing`
//! event at `INFO`. Use it for test or demo; install any `tracing`
//! subscriber to see the output.
//!
//! ## Example output
//! ```text
//! INFO waypost: message received observer="LogWriter" value="guide"
//! INFO waypost: message received observer="LogWriter" value="<none>"
//! ```

use crate::error::ObserverError;
use crate::observers::Observer;

/// Message writer observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogWriter {
    fn on_update(&self, message: Option<&str>) -> Result<(), ObserverError> {
        tracing::info!(
            target: "waypost",
            observer = self.name(),
            value = message.unwrap_or("<none>"),
            "message received"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
