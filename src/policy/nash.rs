use super::Acceptance;
use crate::Progress;
use crate::Utility;
use crate::pareto::Outcome;
use crate::pareto::nash;

/// Canonical acceptance curve: take an offer once its Nash product comes close
/// enough to the best product on the turn's sampled frontier, conceding toward
/// the deadline. Both thresholds relax monotonically with cubic time pressure,
/// so the policy holds firm early and folds late.
#[derive(Debug, Clone, Copy, Default)]
pub struct NashProximity;

impl NashProximity {
    /// Cubic transform of progress: slow early, steep near the deadline.
    fn pressure(progress: Progress) -> f32 {
        progress.powi(3)
    }

    /// Fraction of the frontier's best Nash product an offer must match.
    pub fn slack(progress: Progress) -> Utility {
        crate::NASH_SLACK - crate::NASH_RELAX * Self::pressure(progress)
    }

    /// Reservation utility below which an offer is refused regardless.
    pub fn reserve(progress: Progress) -> Utility {
        crate::RESERVE_BASE - crate::RESERVE_RELAX * Self::pressure(progress)
    }
}

impl Acceptance for NashProximity {
    fn accept(
        &self,
        received: Option<&Outcome>,
        frontier: &[Outcome],
        progress: Progress,
        _modeled: bool,
    ) -> bool {
        let Some(offer) = received else {
            return false;
        };
        offer.product() >= nash(frontier) * Self::slack(progress)
            && offer.ours >= Self::reserve(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::Bid;
    use crate::bidding::Value;

    fn outcome(ours: Utility, theirs: Utility) -> Outcome {
        Outcome {
            ours,
            theirs,
            bid: [("issue".to_string(), Value::from("value"))]
                .into_iter()
                .collect::<Bid>(),
        }
    }

    #[test]
    fn is_nothing_never_accepted() {
        for progress in [0., 0.5, 1.] {
            assert!(!NashProximity.accept(None, &[], progress, true));
        }
    }

    #[test]
    fn is_threshold_nonincreasing() {
        let mut taus = (0..=100).map(|i| i as f32 / 100.);
        let mut prev = taus.next().unwrap();
        for tau in taus {
            assert!(NashProximity::slack(tau) <= NashProximity::slack(prev));
            assert!(NashProximity::reserve(tau) <= NashProximity::reserve(prev));
            prev = tau;
        }
        assert!((NashProximity::slack(0.) - 0.95).abs() < 1e-6);
        assert!((NashProximity::slack(1.) - 0.70).abs() < 1e-6);
        assert!((NashProximity::reserve(0.) - 0.70).abs() < 1e-6);
        assert!((NashProximity::reserve(1.) - 0.40).abs() < 1e-6);
    }

    #[test]
    fn is_balanced_offer_accepted_near_frontier() {
        let frontier = [outcome(0.9, 0.5), outcome(0.8, 0.8), outcome(0.5, 0.9)];
        // product 0.64 against a frontier best of 0.64
        assert!(NashProximity.accept(Some(&outcome(0.8, 0.8)), &frontier, 0., true));
        // weak product early, far from the frontier best
        assert!(!NashProximity.accept(Some(&outcome(0.72, 0.1)), &frontier, 0., true));
    }

    #[test]
    fn is_reservation_binding_early() {
        // fine Nash product, but below the early reservation utility
        let frontier = [outcome(0.5, 0.9)];
        assert!(!NashProximity.accept(Some(&outcome(0.5, 0.9)), &frontier, 0., true));
        // near the deadline the reservation drops and it goes through
        assert!(NashProximity.accept(Some(&outcome(0.5, 0.9)), &frontier, 1., true));
    }

    #[test]
    fn is_empty_frontier_reservation_only() {
        // no frontier: the Nash condition is vacuous, the reservation still binds
        assert!(NashProximity.accept(Some(&outcome(0.8, 0.5)), &[], 0., false));
        assert!(!NashProximity.accept(Some(&outcome(0.6, 0.5)), &[], 0., false));
    }
}
