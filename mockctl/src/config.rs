/// Settings of a [`Controller`](crate::Controller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Verify and finish when the last controller handle is dropped.
    pub verify_on_drop: bool,
    /// Report unexpected calls as fatal instead of collecting them.
    pub fail_fast: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            verify_on_drop: true,
            fail_fast: false,
        }
    }
}

impl ControllerConfig {
    pub fn verify_on_drop(mut self, verify_on_drop: bool) -> Self {
        self.verify_on_drop = verify_on_drop;
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
