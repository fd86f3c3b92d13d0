//! Configuration for the diff algorithms.

/// Per-call configuration for [`diff`](crate::diff) and friends.
///
/// Built with chained setters:
///
/// ```
/// use diffx::DiffOptions;
///
/// let opts = DiffOptions::new().minimal(true).postprocessing(false);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiffOptions {
    pub(crate) use_heuristic: bool,
    pub(crate) force_minimal: bool,
    pub(crate) cost_limit: usize,
    pub(crate) preprocessing: bool,
    pub(crate) postprocessing: bool,
    pub(crate) anchor_elimination: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            use_heuristic: true,
            force_minimal: false,
            cost_limit: 0, // auto-calculated
            preprocessing: true,
            postprocessing: true,
            anchor_elimination: true,
        }
    }
}

impl DiffOptions {
    /// Returns options with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables speed heuristics.
    /// Default: true.
    pub fn heuristic(mut self, enabled: bool) -> Self {
        self.use_heuristic = enabled;
        self
    }

    /// Forces the minimal edit script even if slow. Enabling this also
    /// disables the speed heuristics.
    /// Default: false.
    pub fn minimal(mut self, minimal: bool) -> Self {
        self.force_minimal = minimal;
        if minimal {
            self.use_heuristic = false;
        }
        self
    }

    /// Sets a custom early-termination threshold. 0 means auto-calculate
    /// based on input size.
    /// Default: 0.
    pub fn cost_limit(mut self, n: usize) -> Self {
        self.cost_limit = n;
        self
    }

    /// Enables or disables confusing-element filtering before the Myers
    /// core runs.
    /// Default: true.
    pub fn preprocessing(mut self, enabled: bool) -> Self {
        self.preprocessing = enabled;
        self
    }

    /// Enables or disables boundary shifting after the diff.
    /// Default: true.
    pub fn postprocessing(mut self, enabled: bool) -> Self {
        self.postprocessing = enabled;
        self
    }

    /// Enables or disables the final merge of adjacent same-type ops in
    /// the histogram driver.
    /// Default: true.
    pub fn anchor_elimination(mut self, enabled: bool) -> Self {
        self.anchor_elimination = enabled;
        self
    }
}
