//! Observability sink for soft failures.
//!
//! Functions that recover from bad input instead of failing (the image URL
//! classifier, for one) report what they saw through a [`Diagnostics`]
//! implementation rather than logging directly. Production code uses
//! [`TracingDiagnostics`]; tests use [`RecordingDiagnostics`] to assert on
//! exactly what was emitted without capturing process output.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One emitted diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// The offending value (URL, id, ...).
    pub subject: String,
}

/// Receiver for diagnostics. `Sync` so one sink can be shared across rayon
/// workers and page builds.
pub trait Diagnostics: Sync {
    fn emit(&self, diagnostic: Diagnostic);

    fn warn(&self, message: &str, subject: &str) {
        self.emit(Diagnostic {
            severity: Severity::Warning,
            message: message.to_string(),
            subject: subject.to_string(),
        });
    }

    fn error(&self, message: &str, subject: &str) {
        self.emit(Diagnostic {
            severity: Severity::Error,
            message: message.to_string(),
            subject: subject.to_string(),
        });
    }
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(subject = %diagnostic.subject, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(subject = %diagnostic.subject, "{}", diagnostic.message)
            }
        }
    }
}

/// Collects diagnostics in memory.
///
/// Uses Mutex (not RefCell) so it is Sync like every other sink.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    recorded: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn recorded(&self) -> Vec<Diagnostic> {
        self.recorded
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.recorded()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        match self.recorded.lock() {
            Ok(mut recorded) => recorded.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
