use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// A single admissible value for an issue. Values are opaque labels; no
/// ordering over them is assumed anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Value(String);

impl Value {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for Value {
    fn from(name: String) -> Self {
        Self(name)
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One negotiable issue: an identifier plus its finite, unordered set of
/// admissible values. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    name: String,
    values: Vec<Value>,
}

impl Issue {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} values)", self.name, self.values.len())
    }
}
