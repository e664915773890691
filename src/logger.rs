// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Logger capability
//!
//! Components take an `Arc<dyn Logger>` at construction instead of reaching
//! for a global. [`NoopLogger`] is the default; [`TracingLogger`] forwards to
//! `tracing` under the `carnet` target.

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;

/// Logging sink used by every component
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    /// Start a named timer
    fn time(&self, label: &str);

    /// Stop a named timer and report the elapsed time
    fn time_end(&self, label: &str);
}

/// Shared logger handle
pub type SharedLogger = Arc<dyn Logger>;

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn time(&self, _label: &str) {}
    fn time_end(&self, _label: &str) {}
}

/// Default logger handle (no-op)
pub fn noop() -> SharedLogger {
    Arc::new(NoopLogger)
}

/// Logger backed by `tracing`
#[derive(Debug, Default)]
pub struct TracingLogger {
    timers: DashMap<String, Instant>,
}

impl TracingLogger {
    /// Create a new tracing logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle
    pub fn shared() -> SharedLogger {
        Arc::new(Self::new())
    }

    /// Number of timers started but not yet ended
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "carnet", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "carnet", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "carnet", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "carnet", "{}", message);
    }

    fn time(&self, label: &str) {
        self.timers.insert(label.to_string(), Instant::now());
    }

    fn time_end(&self, label: &str) {
        match self.timers.remove(label) {
            Some((_, started)) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                tracing::debug!(target: "carnet", label, elapsed_ms, "timer finished");
            }
            None => tracing::warn!(target: "carnet", label, "timer was never started"),
        }
    }
}
