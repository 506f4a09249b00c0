//! Identifiers for OJT entities.

use serde::{Deserialize, Serialize};

/// Identifier of a trainee (student) as issued by the placement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraineeId(u64);

impl TraineeId {
    /// Wrap a raw identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TraineeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TraineeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
