use super::config::Config;
use super::decision::Decision;
use super::event::Event;
use super::state::State;
use super::summary::Summary;
use crate::Progress;
use crate::bidding::Bid;
use crate::bidding::Domain;
use crate::pareto::Outcome;
use crate::pareto::frontier;
use crate::policy::Acceptance;
use crate::profile::UtilityFunction;
use crate::proposal::Proposer;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One negotiation session's decision engine.
///
/// Owns all mutable session state and a seedable random source; invoked
/// synchronously, one event at a time, by an external driver. Every `Turn`
/// event yields exactly one decision; all work is in-memory computation
/// bounded by the sampling budget, with no I/O until the session closes.
///
/// Acceptance and proposal share the one sample drawn per turn, so both see
/// the same frontier rather than each resampling the space.
pub struct Engine<U: UtilityFunction> {
    domain: Domain,
    utility: U,
    config: Config,
    state: State,
    proposer: Proposer,
    rng: SmallRng,
}

impl<U: UtilityFunction> Engine<U> {
    pub fn new(domain: Domain, utility: U, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let state = State::new(&domain);
        let proposer = Proposer::new(config.top_k);
        Self {
            domain,
            utility,
            config,
            state,
            proposer,
            rng,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Exactly one decision per `Turn` event; none for the others. Errors
    /// surface only from the own-utility capability, and they are fatal.
    pub fn handle(&mut self, event: Event) -> anyhow::Result<Option<Decision>> {
        match event {
            Event::Opened => {
                self.opened();
                Ok(None)
            }
            Event::Received(bid) => {
                self.received(bid);
                Ok(None)
            }
            Event::Turn(progress) => self.turn(progress).map(Some),
            Event::Closed => {
                self.closed();
                Ok(None)
            }
        }
    }

    fn opened(&mut self) {
        log::info!(
            "{:<24}{} bids over {} issues",
            "session opened",
            self.domain.size(),
            self.domain.issues().len()
        );
    }

    fn received(&mut self, bid: Bid) {
        self.state.model.update(&bid);
        log::debug!("{:<24}{}", "offer received", bid);
        self.state.received = Some(bid);
    }

    fn turn(&mut self, progress: Progress) -> anyhow::Result<Decision> {
        self.state.advance(progress);
        if self.domain.size() == 1 {
            // the space admits exactly one agreement; no point sampling
            return Ok(Decision::Offer(self.domain.at(0)));
        }
        let sample = self.evaluate()?;
        let front = frontier(sample.clone());
        let modeled = self.state.model.observations() > 0;
        if let Some(bid) = self.state.received.clone() {
            let offer = self.appraise(bid)?;
            let accepted =
                self.config
                    .curve
                    .accept(Some(&offer), &front, self.state.progress, modeled);
            if accepted {
                log::info!(
                    "{:<24}τ={:.2} ours={:.3} theirs={:.3}",
                    "accepting",
                    self.state.progress,
                    offer.ours,
                    offer.theirs
                );
                return Ok(Decision::Accept(offer.bid));
            }
        }
        let bid = self
            .proposer
            .select(&sample, &front, self.state.progress, &self.domain, &mut self.rng);
        log::debug!("{:<24}τ={:.2} {}", "offering", self.state.progress, bid);
        Ok(Decision::Offer(bid))
    }

    fn closed(&mut self) {
        log::info!(
            "{:<24}{} turns, {} offers observed",
            "session closed",
            self.state.turns,
            self.state.model.observations()
        );
        if let Some(ref path) = self.config.storage {
            let summary = Summary {
                turns: self.state.turns,
                observed: self.state.model.observations(),
                progress: self.state.progress,
                last: self.state.received.clone(),
            };
            let written = serde_json::to_vec_pretty(&summary)
                .map_err(anyhow::Error::from)
                .and_then(|bytes| std::fs::write(path, bytes).map_err(anyhow::Error::from));
            if let Err(error) = written {
                log::warn!("{:<24}{}", "summary write failed", error);
            }
        }
    }

    /// The turn's shared evaluated sample. Spaces small enough to fit the
    /// budget are walked exhaustively; everything else is sampled uniformly
    /// with replacement.
    fn evaluate(&mut self) -> anyhow::Result<Vec<Outcome>> {
        let budget = self.budget();
        if self.domain.size() <= budget {
            self.domain
                .bids()
                .map(|bid| self.appraise(bid))
                .collect()
        } else {
            (0..budget)
                .map(|_| self.domain.sample(&mut self.rng))
                .collect::<Vec<_>>()
                .into_iter()
                .map(|bid| self.appraise(bid))
                .collect()
        }
    }

    fn appraise(&self, bid: Bid) -> anyhow::Result<Outcome> {
        Ok(Outcome {
            ours: self.utility.utility(&bid)?,
            theirs: self.state.model.predicted(&bid),
            bid,
        })
    }

    /// Cooperative time budget: the sample holds at its configured size for
    /// most of the session, then tapers linearly toward the floor as the wall
    /// clock runs out. There is nothing to preempt, so the engine shrinks its
    /// own work instead.
    fn budget(&self) -> usize {
        let full = self.config.sample_size.max(1);
        let floor = crate::SAMPLE_FLOOR.min(full);
        match self.state.progress {
            p if p <= crate::SAMPLE_TAPER => full,
            p => {
                let remaining = (1. - p) / (1. - crate::SAMPLE_TAPER);
                ((full as f32 * remaining) as usize).clamp(floor, full)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utility;
    use crate::bidding::Issue;
    use crate::bidding::Value;
    use crate::policy::Curve;
    use crate::policy::SigmoidThreshold;
    use crate::profile::LinearAdditive;

    fn domain() -> Domain {
        Domain::new(vec![
            Issue::new(
                "price",
                vec![Value::from("low"), Value::from("mid"), Value::from("high")],
            ),
            Issue::new(
                "color",
                vec![Value::from("red"), Value::from("blue"), Value::from("green")],
            ),
        ])
        .unwrap()
    }

    fn profile(domain: &Domain) -> LinearAdditive {
        LinearAdditive::new(
            domain,
            &[2., 1.],
            &[vec![0.1, 0.5, 1.], vec![0.3, 0.6, 0.9]],
        )
        .unwrap()
    }

    fn config(curve: Curve) -> Config {
        Config {
            curve,
            sample_size: 500,
            seed: Some(0),
            ..Config::default()
        }
    }

    #[test]
    fn is_one_decision_per_turn_only() {
        let domain = domain();
        let mut engine = Engine::new(domain.clone(), profile(&domain), config(Curve::Nash));
        assert!(engine.handle(Event::Opened).unwrap().is_none());
        assert!(engine.handle(Event::Received(domain.at(0))).unwrap().is_none());
        assert!(engine.handle(Event::Turn(0.1)).unwrap().is_some());
        assert!(engine.handle(Event::Closed).unwrap().is_none());
    }

    #[test]
    fn is_cold_start_offering_own_maximum() {
        // 9 bids, exhaustively evaluated; nothing observed from the opponent,
        // so the frontier collapses to the own-utility peak
        let domain = domain();
        let profile = profile(&domain);
        let best = domain
            .bids()
            .max_by(|a, b| {
                profile
                    .utility(a)
                    .unwrap()
                    .total_cmp(&profile.utility(b).unwrap())
            })
            .unwrap();
        let mut engine = Engine::new(domain.clone(), profile, config(Curve::Sigmoid));
        match engine.handle(Event::Turn(0.1)).unwrap().unwrap() {
            Decision::Offer(bid) => assert!(bid == best),
            Decision::Accept(_) => unreachable!("nothing on the table to accept"),
        }
    }

    #[test]
    fn is_sigmoid_gate_enforced_midway() {
        let domain = domain();
        let threshold = SigmoidThreshold::threshold(0.5);
        let received = domain.at(0);
        for (utility, accepted) in [(threshold - 0.05, false), (threshold + 0.05, true)] {
            let flat = move |_: &Bid| Ok::<Utility, anyhow::Error>(utility);
            let mut engine = Engine::new(domain.clone(), flat, config(Curve::Sigmoid));
            engine.handle(Event::Received(received.clone())).unwrap();
            match engine.handle(Event::Turn(0.5)).unwrap().unwrap() {
                Decision::Accept(bid) => {
                    assert!(accepted);
                    assert!(bid == received);
                }
                Decision::Offer(_) => assert!(!accepted),
            }
        }
    }

    #[test]
    fn is_singleton_space_returned_without_sampling() {
        let domain = Domain::new(vec![Issue::new("only", vec![Value::from("choice")])]).unwrap();
        let failing = |_: &Bid| -> anyhow::Result<Utility> {
            anyhow::bail!("utility must not be consulted")
        };
        let mut engine = Engine::new(domain.clone(), failing, config(Curve::Nash));
        match engine.handle(Event::Turn(0.5)).unwrap().unwrap() {
            Decision::Offer(bid) => assert!(bid == domain.at(0)),
            Decision::Accept(_) => unreachable!(),
        }
    }

    #[test]
    fn is_utility_failure_fatal() {
        let domain = domain();
        let failing = |_: &Bid| -> anyhow::Result<Utility> { anyhow::bail!("broken capability") };
        let mut engine = Engine::new(domain, failing, config(Curve::Nash));
        assert!(engine.handle(Event::Turn(0.1)).is_err());
    }

    #[test]
    fn is_observation_accumulated() {
        let domain = domain();
        let mut engine = Engine::new(domain.clone(), profile(&domain), config(Curve::Nash));
        assert!(engine.state().model.observations() == 0);
        engine.handle(Event::Received(domain.at(3))).unwrap();
        engine.handle(Event::Received(domain.at(4))).unwrap();
        assert!(engine.state().model.observations() == 2);
        assert!(engine.state().received == Some(domain.at(4)));
    }

    #[test]
    fn is_seeded_engine_reproducible() {
        let domain = domain();
        let mut a = Engine::new(domain.clone(), profile(&domain), config(Curve::Nash));
        let mut b = Engine::new(domain.clone(), profile(&domain), config(Curve::Nash));
        for turn in 0..10 {
            let progress = turn as f32 / 10.;
            let x = a.handle(Event::Turn(progress)).unwrap();
            let y = b.handle(Event::Turn(progress)).unwrap();
            assert!(x == y);
        }
    }

    #[test]
    fn is_budget_tapering_near_deadline() {
        let domain = domain();
        let mut engine = Engine::new(domain.clone(), profile(&domain), config(Curve::Nash));
        let early = engine.budget();
        engine.state.advance(0.99);
        assert!(engine.budget() < early);
        assert!(engine.budget() >= crate::SAMPLE_FLOOR.min(early));
    }

    #[test]
    fn is_summary_written_on_close() {
        let dir = std::env::temp_dir().join("haggle-summary-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.json");
        let domain = domain();
        let mut config = config(Curve::Nash);
        config.storage = Some(path.clone());
        let mut engine = Engine::new(domain.clone(), profile(&domain), config);
        engine.handle(Event::Opened).unwrap();
        engine.handle(Event::Received(domain.at(2))).unwrap();
        engine.handle(Event::Turn(0.4)).unwrap();
        engine.handle(Event::Closed).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"turns\": 1"));
        assert!(written.contains("\"observed\": 1"));
        std::fs::remove_file(&path).unwrap();
    }
}
