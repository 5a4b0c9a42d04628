use crate::Progress;
use crate::Utility;
use crate::bidding::Bid;
use crate::bidding::Domain;
use crate::pareto::Outcome;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Selects the one bid to put on the table each turn the engine did not
/// accept. Works over the turn's shared evaluated sample and its frontier.
///
/// Preference order:
/// 1. the frontier point where the parties' utilities are closest (a
///    Kalai-style balanced split), first occurrence winning ties;
/// 2. with no frontier, the top-K sampled bids under a time-shifted blend of
///    self-interest and Nash product, one drawn uniformly among them so the
///    stream of offers stays unpredictable;
/// 3. with nothing sampled at all, a fresh uniform bid. Never comes back
///    empty-handed.
#[derive(Debug, Clone)]
pub struct Proposer {
    top_k: usize,
}

impl Proposer {
    pub fn new(top_k: usize) -> Self {
        Self {
            top_k: top_k.max(1),
        }
    }

    /// Self-interest weight of the fallback scorer: 0.85 at the start of the
    /// session, ceding toward joint value as the deadline nears.
    pub fn alpha(progress: Progress) -> f32 {
        crate::ALPHA_BASE - crate::ALPHA_DECAY * progress
    }

    fn score(outcome: &Outcome, alpha: f32) -> Utility {
        alpha * outcome.ours + (1. - alpha) * outcome.product()
    }

    /// The most balanced frontier point; ties go to the earliest in frontier order.
    fn balanced(frontier: &[Outcome]) -> Option<&Outcome> {
        frontier.iter().fold(None, |best, point| match best {
            Some(kept) if kept.imbalance() <= point.imbalance() => Some(kept),
            _ => Some(point),
        })
    }

    pub fn select(
        &self,
        outcomes: &[Outcome],
        frontier: &[Outcome],
        progress: Progress,
        domain: &Domain,
        rng: &mut SmallRng,
    ) -> Bid {
        if let Some(point) = Self::balanced(frontier) {
            return point.bid.clone();
        }
        let alpha = Self::alpha(progress);
        let mut ranked = outcomes.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| Self::score(b, alpha).total_cmp(&Self::score(a, alpha)));
        ranked.truncate(self.top_k);
        match ranked.choose(rng) {
            Some(outcome) => outcome.bid.clone(),
            None => domain.sample(rng),
        }
    }
}
