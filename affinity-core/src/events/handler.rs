//! MiningEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling mining events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires `Send + Sync`
/// for use alongside parallel candidate counting.
pub trait MiningEventHandler: Send + Sync {
    // ---- Encoding ----
    fn on_encode_complete(&self, _event: &EncodeCompleteEvent) {}

    // ---- Mining ----
    fn on_level_mined(&self, _event: &LevelMinedEvent) {}
    fn on_fallback_triggered(&self, _event: &FallbackTriggeredEvent) {}

    // ---- Rules ----
    fn on_rules_generated(&self, _event: &RulesGeneratedEvent) {}

    // ---- Pipeline ----
    fn on_pipeline_complete(&self, _event: &PipelineCompleteEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
