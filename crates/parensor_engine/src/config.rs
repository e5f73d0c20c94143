//! Configuration for program execution.

/// Execution settings for an [`Engine`](crate::Engine).
///
/// Programs are not guaranteed to terminate; `max_steps` is the kill switch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of instructions to execute, chained jumps included.
    /// `None` runs until the program halts.
    pub max_steps: Option<u64>,
}

impl EngineConfig {
    /// Creates the default configuration (no limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the step limit.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Builder method to remove the step limit.
    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.max_steps = None;
        self
    }
}
