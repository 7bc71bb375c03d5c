use std::time::Duration;

use crate::language::Language;

/// How long the stub backend pretends to work.
pub const DEFAULT_STUB_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub default_source: Language,
    pub default_target: Language,
    pub stub_latency: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            default_source: Language::En,
            default_target: Language::Es,
            stub_latency: DEFAULT_STUB_LATENCY,
        }
    }
}

impl WorkflowConfig {
    pub fn with_languages(mut self, source: Language, target: Language) -> Self {
        self.default_source = source;
        self.default_target = target;
        self
    }

    pub fn with_stub_latency(mut self, latency: Duration) -> Self {
        self.stub_latency = latency;
        self
    }
}
