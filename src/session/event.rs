use crate::Progress;
use crate::bidding::Bid;

/// Everything the outside driver can tell the engine, one variant per
/// protocol moment. Dispatch is a match over this tag, one handler per case.
#[derive(Debug, Clone)]
pub enum Event {
    /// The session has started.
    Opened,
    /// The counterpart put a bid on the table.
    Received(Bid),
    /// Our turn to act, with the driver's progress reading τ ∈ [0, 1].
    Turn(Progress),
    /// The session is over, by agreement or by deadline.
    Closed,
}
