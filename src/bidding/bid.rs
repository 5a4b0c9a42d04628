use super::issue::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;

/// A complete assignment of one value to every issue in the domain.
/// Immutable value object; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Bid(BTreeMap<String, Value>);

impl Bid {
    /// The value this bid assigns to the named issue, if any.
    pub fn value(&self, issue: &str) -> Option<&Value> {
        self.0.get(issue)
    }
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(issue, value)| (issue.as_str(), value))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Bid {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Bid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (issue, value)) in self.0.iter().enumerate() {
            match i {
                0 => write!(f, "{}={}", issue, value)?,
                _ => write!(f, ", {}={}", issue, value)?,
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(pairs: &[(&str, &str)]) -> Bid {
        pairs
            .iter()
            .map(|(i, v)| (i.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn is_equality_structural() {
        let a = bid(&[("price", "high"), ("color", "red")]);
        let b = bid(&[("color", "red"), ("price", "high")]);
        assert!(a == b);
    }

    #[test]
    fn is_lookup_by_issue_name() {
        let a = bid(&[("price", "high")]);
        assert!(a.value("price") == Some(&Value::from("high")));
        assert!(a.value("flavor") == None);
    }
}
