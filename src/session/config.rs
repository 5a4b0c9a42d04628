use crate::policy::Curve;
use std::path::PathBuf;

/// Engine tuning for one session. `Default` wires the crate-level constants;
/// drivers override per session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which acceptance curve is active. Exactly one per engine.
    pub curve: Curve,
    /// Bids sampled per turn before the deadline-aware taper.
    pub sample_size: usize,
    /// Candidates kept by the fallback offer scorer.
    pub top_k: usize,
    /// Seed for the engine's random source; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Where to drop the best-effort end-of-session note, if anywhere.
    pub storage: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curve: Curve::Nash,
            sample_size: crate::SAMPLE_SIZE,
            top_k: crate::TOP_K,
            seed: None,
            storage: None,
        }
    }
}
