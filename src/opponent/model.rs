use crate::Utility;
use crate::bidding::Bid;
use crate::bidding::Domain;
use crate::bidding::Value;
use std::collections::BTreeMap;

/// Frequency-based estimate of the counterpart's preferences, built purely
/// from the offers they make within one session.
///
/// Per issue we keep an observation count for every value seen. An issue whose
/// observed values barely vary is inferred to matter to the opponent (they
/// never concede it), so its weight is the Herfindahl concentration of its
/// frequency table, normalized across issues. A value's score is its count
/// relative to the issue's most-offered value. State accumulates monotonically
/// and is discarded with the session; nothing is ever rolled back.
#[derive(Debug, Clone)]
pub struct OpponentModel {
    counts: BTreeMap<String, BTreeMap<Value, u32>>,
    observations: u32,
}

impl OpponentModel {
    pub fn new(domain: &Domain) -> Self {
        Self {
            counts: domain
                .issues()
                .iter()
                .map(|issue| (issue.name().to_string(), BTreeMap::new()))
                .collect(),
            observations: 0,
        }
    }

    /// How many offers have been consumed. Zero means no model yet.
    pub fn observations(&self) -> u32 {
        self.observations
    }

    /// Count the value chosen on each issue of an observed offer. Issues
    /// foreign to the domain get their own table rather than a fault.
    pub fn update(&mut self, bid: &Bid) {
        for (issue, value) in bid.entries() {
            *self
                .counts
                .entry(issue.to_string())
                .or_default()
                .entry(value.clone())
                .or_insert(0) += 1;
        }
        self.observations += 1;
    }

    /// Predicted opponent utility in [0, 1]. Pure in the accumulated state:
    /// identical results between updates. A fixed neutral baseline of 0 before
    /// the first observation; unknown issues or values in the queried bid
    /// contribute score 0, never an error.
    pub fn predicted(&self, bid: &Bid) -> Utility {
        if self.observations == 0 {
            return 0.;
        }
        let norm = self
            .counts
            .values()
            .map(|table| Self::concentration(table))
            .sum::<f32>();
        if norm <= 0. {
            return 0.;
        }
        self.counts
            .iter()
            .map(|(issue, table)| {
                let weight = Self::concentration(table) / norm;
                let score = bid
                    .value(issue)
                    .map(|value| Self::score(table, value))
                    .unwrap_or(0.);
                weight * score
            })
            .sum::<f32>()
            .clamp(0., 1.)
    }

    /// Sum of squared observed frequencies: 1 when one value is ever offered,
    /// approaching 1/k when offers spread evenly over k values.
    fn concentration(table: &BTreeMap<Value, u32>) -> f32 {
        let total = table.values().sum::<u32>();
        match total {
            0 => 0.,
            _ => table
                .values()
                .map(|count| *count as f32 / total as f32)
                .map(|frequency| frequency * frequency)
                .sum(),
        }
    }

    /// Observation frequency relative to the issue's most-offered value.
    fn score(table: &BTreeMap<Value, u32>, value: &Value) -> f32 {
        let peak = table.values().copied().max().unwrap_or(0);
        match peak {
            0 => 0.,
            _ => table.get(value).copied().unwrap_or(0) as f32 / peak as f32,
        }
    }
}
