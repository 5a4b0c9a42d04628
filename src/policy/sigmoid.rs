use super::Acceptance;
use crate::Progress;
use crate::Utility;
use crate::pareto::Outcome;

/// Alternate acceptance curve: a strictly decreasing logistic threshold on own
/// utility alone. Holds near the ceiling for most of the session, crosses half
/// the ceiling at the inflection point, and collapses toward zero past it.
///
/// Very late (τ past `FAIR_AFTER`), once the opponent has been observed at
/// all, an offer that splits a large pie nearly evenly is taken even below
/// the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigmoidThreshold;

impl SigmoidThreshold {
    /// threshold(τ) = CEIL · (1 − 1 / (1 + e^(−SLOPE·(τ − SHIFT))))
    pub fn threshold(progress: Progress) -> Utility {
        let logistic = 1. / (1. + (-crate::SIGMOID_SLOPE * (progress - crate::SIGMOID_SHIFT)).exp());
        crate::SIGMOID_CEIL * (1. - logistic)
    }

    fn fair(offer: &Outcome, progress: Progress, modeled: bool) -> bool {
        modeled
            && progress > crate::FAIR_AFTER
            && offer.ours + offer.theirs >= crate::FAIR_WELFARE
            && offer.imbalance() <= crate::FAIR_MARGIN
    }
}

impl Acceptance for SigmoidThreshold {
    fn accept(
        &self,
        received: Option<&Outcome>,
        _frontier: &[Outcome],
        progress: Progress,
        modeled: bool,
    ) -> bool {
        let Some(offer) = received else {
            return false;
        };
        offer.ours >= Self::threshold(progress) || Self::fair(offer, progress, modeled)
    }
}
