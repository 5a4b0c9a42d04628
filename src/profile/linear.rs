use super::UtilityFunction;
use crate::Utility;
use crate::bidding::Bid;
use crate::bidding::Domain;
use anyhow::Context;
use rand::Rng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

/// Linear additive utility space: normalized issue weights and per-value
/// scores in [0, 1]. The usual shape of a negotiation preference profile;
/// used by the arena and the tests as the engine's own-utility capability.
/// Loading profiles from files stays an external concern.
#[derive(Debug, Clone)]
pub struct LinearAdditive {
    weights: BTreeMap<String, f32>,
    scores: BTreeMap<String, BTreeMap<String, f32>>,
}

impl LinearAdditive {
    /// Weights and score rows are given in the domain's issue order. Weights
    /// must be non-negative with a positive sum (they are normalized here);
    /// scores must already live in [0, 1].
    pub fn new(domain: &Domain, weights: &[f32], scores: &[Vec<f32>]) -> anyhow::Result<Self> {
        let issues = domain.issues();
        anyhow::ensure!(weights.len() == issues.len(), "one weight per issue");
        anyhow::ensure!(scores.len() == issues.len(), "one score row per issue");
        anyhow::ensure!(weights.iter().all(|w| *w >= 0.), "weights are non-negative");
        let total = weights.iter().sum::<f32>();
        anyhow::ensure!(total > 0., "at least one issue carries weight");
        let mut table = BTreeMap::new();
        for (issue, row) in issues.iter().zip(scores) {
            anyhow::ensure!(
                row.len() == issue.cardinality(),
                "one score per value of issue {}",
                issue.name()
            );
            anyhow::ensure!(
                row.iter().all(|s| (0. ..=1.).contains(s)),
                "scores of issue {} lie in [0, 1]",
                issue.name()
            );
            table.insert(
                issue.name().to_string(),
                issue
                    .values()
                    .iter()
                    .zip(row)
                    .map(|(value, score)| (value.name().to_string(), *score))
                    .collect(),
            );
        }
        Ok(Self {
            weights: issues
                .iter()
                .zip(weights)
                .map(|(issue, weight)| (issue.name().to_string(), weight / total))
                .collect(),
            scores: table,
        })
    }

    /// Random profile whose best bid is worth exactly 1: random positive
    /// weights, random per-value scores max-normalized within each issue.
    pub fn random(domain: &Domain, rng: &mut SmallRng) -> Self {
        let weights = domain
            .issues()
            .iter()
            .map(|_| rng.random_range(0.2..1.0))
            .collect::<Vec<f32>>();
        let scores = domain
            .issues()
            .iter()
            .map(|issue| {
                let raw = issue
                    .values()
                    .iter()
                    .map(|_| rng.random_range(0.05..1.0))
                    .collect::<Vec<f32>>();
                let peak = raw.iter().fold(f32::MIN, |a, b| a.max(*b));
                raw.into_iter().map(|score| score / peak).collect()
            })
            .collect::<Vec<Vec<f32>>>();
        Self::new(domain, &weights, &scores).expect("generated rows match the domain")
    }
}

impl UtilityFunction for LinearAdditive {
    fn utility(&self, bid: &Bid) -> anyhow::Result<Utility> {
        self.weights
            .iter()
            .map(|(issue, weight)| {
                let value = bid
                    .value(issue)
                    .with_context(|| format!("bid assigns no value to issue {}", issue))?;
                let score = self
                    .scores
                    .get(issue)
                    .and_then(|row| row.get(value.name()))
                    .with_context(|| format!("value {} foreign to issue {}", value, issue))?;
                Ok(weight * score)
            })
            .sum()
    }
}
