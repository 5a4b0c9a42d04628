use crate::bidding::Bid;
use std::fmt::Display;
use std::fmt::Formatter;

/// The engine's single decision per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Take the counterpart's last offer.
    Accept(Bid),
    /// Put a new bid on the table.
    Offer(Bid),
}

impl Decision {
    pub fn bid(&self) -> &Bid {
        match self {
            Self::Accept(bid) | Self::Offer(bid) => bid,
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accept(bid) => write!(f, "accept {}", bid),
            Self::Offer(bid) => write!(f, "offer {}", bid),
        }
    }
}
