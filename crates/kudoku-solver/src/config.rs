//! Technique selection.
//!
//! [`TechniqueSet`] replaces the original engine's numeric method mask with
//! named booleans. Singles (naked and hidden) always run; everything else
//! is opt-in, so callers can compose a specific difficulty profile.

/// Which deduction techniques the engine may use.
///
/// # Examples
///
/// ```
/// use kudoku_solver::TechniqueSet;
///
/// let basic = TechniqueSet::singles_only().with_locked_candidates(true);
/// assert!(basic.locked_candidates);
/// assert!(!basic.fishies);
///
/// let full = TechniqueSet::all();
/// assert!(full.two_step_chains);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueSet {
    /// Locked candidates (pointing and claiming).
    pub locked_candidates: bool,
    /// Naked and hidden subsets of sizes 2-4.
    pub subsets: bool,
    /// Fishies: X-Wing, Swordfish, Jellyfish.
    pub fishies: bool,
    /// One-step commonality tests (hypothetical singles propagation).
    pub one_step_chains: bool,
    /// Two-step commonality tests (hypothetical propagation with locked
    /// candidates and subsets).
    pub two_step_chains: bool,
}

impl Default for TechniqueSet {
    fn default() -> Self {
        Self::all()
    }
}

impl TechniqueSet {
    /// Singles only; every optional technique disabled.
    #[must_use]
    pub const fn singles_only() -> Self {
        Self {
            locked_candidates: false,
            subsets: false,
            fishies: false,
            one_step_chains: false,
            two_step_chains: false,
        }
    }

    /// Every technique enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            locked_candidates: true,
            subsets: true,
            fishies: true,
            one_step_chains: true,
            two_step_chains: true,
        }
    }

    /// Returns a copy with locked candidates enabled or disabled.
    #[must_use]
    pub const fn with_locked_candidates(mut self, enabled: bool) -> Self {
        self.locked_candidates = enabled;
        self
    }

    /// Returns a copy with subset searching enabled or disabled.
    #[must_use]
    pub const fn with_subsets(mut self, enabled: bool) -> Self {
        self.subsets = enabled;
        self
    }

    /// Returns a copy with fishies enabled or disabled.
    #[must_use]
    pub const fn with_fishies(mut self, enabled: bool) -> Self {
        self.fishies = enabled;
        self
    }

    /// Returns a copy with one-step commonality tests enabled or disabled.
    #[must_use]
    pub const fn with_one_step_chains(mut self, enabled: bool) -> Self {
        self.one_step_chains = enabled;
        self
    }

    /// Returns a copy with two-step commonality tests enabled or disabled.
    #[must_use]
    pub const fn with_two_step_chains(mut self, enabled: bool) -> Self {
        self.two_step_chains = enabled;
        self
    }
}
