pub mod linear;
pub use linear::*;

use crate::Utility;
use crate::bidding::Bid;

/// The externally supplied side of the negotiation: a deterministic pure map
/// from complete bids into [0, 1]. The engine consumes this as a capability
/// and treats its failures as fatal, since it cannot negotiate without valid
/// utility information.
pub trait UtilityFunction {
    fn utility(&self, bid: &Bid) -> anyhow::Result<Utility>;
}

impl<F> UtilityFunction for F
where
    F: Fn(&Bid) -> anyhow::Result<Utility>,
{
    fn utility(&self, bid: &Bid) -> anyhow::Result<Utility> {
        self(bid)
    }
}
