use super::bid::Bid;
use super::issue::Issue;
use rand::Rng;
use rand::rngs::SmallRng;

/// The fixed bid space for one session: an ordered collection of issues whose
/// Cartesian product defines every reachable agreement. Supports uniform
/// random sampling of complete bids via mixed-radix indexing, so the full
/// space never needs to be materialized.
#[derive(Debug, Clone)]
pub struct Domain {
    issues: Vec<Issue>,
}

impl Domain {
    pub fn new(issues: Vec<Issue>) -> anyhow::Result<Self> {
        anyhow::ensure!(!issues.is_empty(), "domain requires at least one issue");
        for issue in &issues {
            anyhow::ensure!(
                issue.cardinality() > 0,
                "issue {} admits no values",
                issue.name()
            );
        }
        Ok(Self { issues })
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Number of distinct bids in the space.
    pub fn size(&self) -> usize {
        self.issues
            .iter()
            .map(|issue| issue.cardinality())
            .fold(1, usize::saturating_mul)
    }

    /// Mixed-radix decode of a flat index into a complete bid.
    /// Total for every `index < self.size()`.
    pub fn at(&self, index: usize) -> Bid {
        let mut index = index;
        self.issues
            .iter()
            .map(|issue| {
                let cardinality = issue.cardinality();
                let value = issue.values()[index % cardinality].clone();
                index /= cardinality;
                (issue.name().to_string(), value)
            })
            .collect()
    }

    /// Uniform draw over the full space, with replacement.
    pub fn sample(&self, rng: &mut SmallRng) -> Bid {
        self.at(rng.random_range(0..self.size()))
    }

    /// Exhaustive enumeration. Intended for spaces small enough to walk; the
    /// engine falls back to `sample` everywhere else.
    pub fn bids(&self) -> impl Iterator<Item = Bid> + '_ {
        (0..self.size()).map(|index| self.at(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::issue::Value;
    use rand::SeedableRng;

    fn domain() -> Domain {
        Domain::new(vec![
            Issue::new("price", vec!["low", "mid", "high"].into_iter().map(Value::from).collect()),
            Issue::new("color", vec!["red", "blue"].into_iter().map(Value::from).collect()),
        ])
        .unwrap()
    }

    #[test]
    fn is_size_cartesian_product() {
        assert!(domain().size() == 6);
    }

    #[test]
    fn is_indexing_total_and_distinct() {
        let domain = domain();
        let bids = domain.bids().collect::<Vec<_>>();
        assert!(bids.len() == domain.size());
        for (i, a) in bids.iter().enumerate() {
            assert!(a.len() == domain.issues().len());
            for b in bids.iter().skip(i + 1) {
                assert!(a != b);
            }
        }
    }

    #[test]
    fn is_sample_within_space() {
        let domain = domain();
        let all = domain.bids().collect::<Vec<_>>();
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(all.contains(&domain.sample(&mut rng)));
        }
    }

    #[test]
    fn is_singleton_domain_valid() {
        let domain = Domain::new(vec![Issue::new("only", vec![Value::from("choice")])]).unwrap();
        assert!(domain.size() == 1);
        assert!(domain.at(0).value("only") == Some(&Value::from("choice")));
    }

    #[test]
    fn is_empty_issue_rejected() {
        assert!(Domain::new(vec![Issue::new("mute", vec![])]).is_err());
        assert!(Domain::new(vec![]).is_err());
    }
}
