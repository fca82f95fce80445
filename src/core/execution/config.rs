/// Configuration for the reference cycle engine
///
/// Controls how many evaluation passes the engine allows within one step
/// before giving up on a cell that keeps asking to be re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on `eval()` calls within a single step
    pub max_settle_passes: u32,
}

/// Default settle limit; a well-behaved cell settles in one pass
pub const DEFAULT_MAX_SETTLE_PASSES: u32 = 16;

impl EngineConfig {
    /// Create a new engine configuration with default values
    pub fn new() -> Self {
        Self {
            max_settle_passes: DEFAULT_MAX_SETTLE_PASSES,
        }
    }

    /// Set the settle pass limit (at least one pass is always made)
    pub fn with_max_settle_passes(mut self, passes: u32) -> Self {
        self.max_settle_passes = passes.max(1);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
