/// Caller-facing configuration for the outline engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Emit debug-level logs for pass and publish activity.
    pub debug_logging: bool,
    /// Selector for the watch root. The watcher stays inert when it matches
    /// nothing.
    pub root_selector: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            debug_logging: false,
            root_selector: "body".to_string(),
        }
    }
}
