use crate::Utility;
use crate::bidding::Bid;

/// One evaluated point in joint utility space: what a sampled bid is worth to
/// us and what the opponent model thinks it is worth to them.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub ours: Utility,
    pub theirs: Utility,
    pub bid: Bid,
}

impl Outcome {
    /// Nash product of the two parties' utilities.
    pub fn product(&self) -> Utility {
        self.ours * self.theirs
    }
    /// How far the parties' utilities are apart; 0 is a perfectly balanced split.
    pub fn imbalance(&self) -> Utility {
        (self.ours - self.theirs).abs()
    }
}

/// Non-dominated subset of a finite sample, ascending by own utility.
///
/// A dominates B iff A is at least as good for both parties and strictly
/// better for at least one. Sort descending by (ours, theirs) into a
/// deterministic total order, then sweep tracking the running maximum of
/// theirs: a point survives iff it strictly raises that maximum. O(n log n),
/// and exact duplicates collapse to one representative. This is a frontier of
/// the sample, not of the full bid space; coverage is bounded by the sample.
pub fn frontier(mut sample: Vec<Outcome>) -> Vec<Outcome> {
    sample.sort_by(|a, b| {
        b.ours
            .total_cmp(&a.ours)
            .then(b.theirs.total_cmp(&a.theirs))
    });
    let mut front = Vec::new();
    let mut best = f32::NEG_INFINITY;
    for point in sample {
        if point.theirs > best {
            best = point.theirs;
            front.push(point);
        }
    }
    front.reverse();
    front
}

/// Maximum Nash product over a set of outcomes, 0 when empty.
pub fn nash(outcomes: &[Outcome]) -> Utility {
    outcomes.iter().map(|o| o.product()).fold(0., f32::max)
}
