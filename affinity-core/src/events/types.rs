//! Event payload types for all mining events.

/// Payload for `on_encode_complete`.
#[derive(Debug, Clone)]
pub struct EncodeCompleteEvent {
    pub transactions: usize,
    pub distinct_items: usize,
}

/// Payload for `on_level_mined`.
#[derive(Debug, Clone)]
pub struct LevelMinedEvent {
    pub level: usize,
    pub candidates: usize,
    pub frequent: usize,
}

/// Payload for `on_fallback_triggered`.
#[derive(Debug, Clone)]
pub struct FallbackTriggeredEvent {
    pub primary_support: f64,
    pub fallback_support: f64,
}

/// Payload for `on_rules_generated`.
#[derive(Debug, Clone)]
pub struct RulesGeneratedEvent {
    pub candidates: usize,
    pub kept: usize,
}

/// Payload for `on_pipeline_complete`.
#[derive(Debug, Clone)]
pub struct PipelineCompleteEvent {
    pub total_itemsets: usize,
    pub total_rules: usize,
    pub fallback_triggered: bool,
    pub duration_ms: u64,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
