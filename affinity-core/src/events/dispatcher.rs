//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::MiningEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost. The compiler may optimize it away entirely.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn MiningEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn MiningEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn MiningEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing");
            }
        }
    }

    // ---- Encoding ----
    pub fn emit_encode_complete(&self, event: &EncodeCompleteEvent) {
        self.emit(|h| h.on_encode_complete(event));
    }

    // ---- Mining ----
    pub fn emit_level_mined(&self, event: &LevelMinedEvent) {
        self.emit(|h| h.on_level_mined(event));
    }

    pub fn emit_fallback_triggered(&self, event: &FallbackTriggeredEvent) {
        self.emit(|h| h.on_fallback_triggered(event));
    }

    // ---- Rules ----
    pub fn emit_rules_generated(&self, event: &RulesGeneratedEvent) {
        self.emit(|h| h.on_rules_generated(event));
    }

    // ---- Pipeline ----
    pub fn emit_pipeline_complete(&self, event: &PipelineCompleteEvent) {
        self.emit(|h| h.on_pipeline_complete(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
