//! Decision engine for one party in a bilateral, multi-issue, time-bounded
//! negotiation over a discrete space of agreements.
//!
//! Each turn the engine produces exactly one decision: accept the counterpart's
//! last offer, or put a new one on the table. Everything around it (transport,
//! deadline bookkeeping, profile loading) is an external driver's job.

pub mod bidding;
pub mod opponent;
pub mod pareto;
pub mod policy;
pub mod profile;
pub mod proposal;
pub mod session;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Utilities for either party, normalized into [0, 1].
pub type Utility = f32;
/// Normalized elapsed time within the deadline: 0 at session start, 1 at the end.
pub type Progress = f32;

// ============================================================================
// PER-TURN SAMPLING
// The bid space is typically too large to enumerate, so all Pareto and Nash
// computations run over a fresh uniform sample drawn once per turn.
// ============================================================================
/// Bids drawn per turn while the deadline is far.
pub const SAMPLE_SIZE: usize = 5_000;
/// Floor on the per-turn sample once the deadline-aware budget starts shrinking it.
pub const SAMPLE_FLOOR: usize = 256;
/// Progress after which the sampling budget tapers off toward the floor.
pub const SAMPLE_TAPER: Progress = 0.9;

// ============================================================================
// NASH-PROXIMITY ACCEPTANCE
// Accept offers whose Nash product comes close enough to the sampled frontier's
// best, with both thresholds relaxing as the deadline approaches.
// ============================================================================
/// Fraction of the frontier's best Nash product an offer must reach at τ = 0.
pub const NASH_SLACK: Utility = 0.95;
/// How much of that fraction is given up under full time pressure.
pub const NASH_RELAX: Utility = 0.25;
/// Reservation utility at τ = 0; offers below it are refused outright.
pub const RESERVE_BASE: Utility = 0.70;
/// How far the reservation utility drops under full time pressure.
pub const RESERVE_RELAX: Utility = 0.30;

// ============================================================================
// SIGMOID ACCEPTANCE
// threshold(τ) = CEIL · (1 − 1 / (1 + e^(−SLOPE·(τ − SHIFT))))
// ============================================================================
/// Upper asymptote of the acceptance threshold.
pub const SIGMOID_CEIL: Utility = 0.9;
/// Steepness of the concession around the inflection point.
pub const SIGMOID_SLOPE: f32 = 10.0;
/// Inflection point: where the threshold crosses half its ceiling.
pub const SIGMOID_SHIFT: Progress = 0.7;
/// Progress after which the late fairness override may fire.
pub const FAIR_AFTER: Progress = 0.9;
/// Minimum joint welfare (ours + theirs) for the fairness override.
pub const FAIR_WELFARE: Utility = 1.6;
/// Maximum utility gap between the parties for the fairness override.
pub const FAIR_MARGIN: Utility = 0.2;

// ============================================================================
// OFFER SELECTION FALLBACK
// score(b) = α·ours + (1−α)·ours·theirs, with α sliding from self-interest
// toward joint value as the deadline nears.
// ============================================================================
/// Self-interest weight at τ = 0.
pub const ALPHA_BASE: f32 = 0.85;
/// How much of that weight is ceded to the Nash term by τ = 1.
pub const ALPHA_DECAY: f32 = 0.5;
/// Candidates kept by the fallback scorer before the uniform draw among them.
pub const TOP_K: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "arena")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
