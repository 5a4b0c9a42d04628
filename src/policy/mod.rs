pub mod nash;
pub use nash::*;

pub mod sigmoid;
pub use sigmoid::*;

use crate::Progress;
use crate::pareto::Outcome;
use std::fmt::Display;
use std::fmt::Formatter;

/// Per-turn accept/reject decision over the counterpart's last offer.
///
/// Policies are stateless between turns: everything they look at arrives as
/// arguments, freshly appraised by the engine. `received` is `None` until the
/// counterpart has offered anything, and every policy rejects in that case —
/// there is nothing to accept. `frontier` is the turn's shared sampled Pareto
/// frontier; `modeled` says whether any opponent observations exist yet.
pub trait Acceptance {
    fn accept(
        &self,
        received: Option<&Outcome>,
        frontier: &[Outcome],
        progress: Progress,
        modeled: bool,
    ) -> bool;
}

/// Configured choice of acceptance curve. Exactly one is active per engine;
/// the variants stay separate strategies rather than being merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "arena", derive(clap::ValueEnum))]
pub enum Curve {
    Nash,
    Sigmoid,
}

impl Acceptance for Curve {
    fn accept(
        &self,
        received: Option<&Outcome>,
        frontier: &[Outcome],
        progress: Progress,
        modeled: bool,
    ) -> bool {
        match self {
            Self::Nash => NashProximity.accept(received, frontier, progress, modeled),
            Self::Sigmoid => SigmoidThreshold.accept(received, frontier, progress, modeled),
        }
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nash => write!(f, "nash"),
            Self::Sigmoid => write!(f, "sigmoid"),
        }
    }
}
