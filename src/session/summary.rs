use crate::Progress;
use crate::bidding::Bid;
use serde::Serialize;

/// Short end-of-session note, written best-effort to the configured storage
/// path. Informational only; nothing reads it back within a session.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Turns this engine acted on.
    pub turns: u32,
    /// Offers observed from the counterpart.
    pub observed: u32,
    /// Last progress reading before the session closed.
    pub progress: Progress,
    /// The counterpart's final offer, if any arrived.
    pub last: Option<Bid>,
}
