use crate::Progress;
use crate::bidding::Bid;
use crate::bidding::Domain;
use crate::opponent::OpponentModel;

/// Per-session mutable accumulators, owned by exactly one engine and
/// discarded at session end. No globals, no sharing across sessions.
#[derive(Debug, Clone)]
pub struct State {
    pub progress: Progress,
    pub received: Option<Bid>,
    pub model: OpponentModel,
    pub turns: u32,
}

impl State {
    pub fn new(domain: &Domain) -> Self {
        Self {
            progress: 0.,
            received: None,
            model: OpponentModel::new(domain),
            turns: 0,
        }
    }

    /// Driver progress readings are clamped into [0, 1] and made monotone;
    /// a stale reading never winds the clock back.
    pub fn advance(&mut self, progress: Progress) {
        self.progress = self.progress.max(progress.clamp(0., 1.));
        self.turns += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::Issue;
    use crate::bidding::Value;

    #[test]
    fn is_progress_monotone_and_clamped() {
        let domain = Domain::new(vec![Issue::new("only", vec![Value::from("choice")])]).unwrap();
        let mut state = State::new(&domain);
        state.advance(0.5);
        state.advance(0.3);
        assert!(state.progress == 0.5);
        state.advance(7.);
        assert!(state.progress == 1.);
        assert!(state.turns == 3);
    }
}
