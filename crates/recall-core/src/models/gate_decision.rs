use serde::{Deserialize, Serialize};

/// Outcome of the keyword topic gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    /// Query contains an off-topic term.
    Blocked,
    /// Query is long enough to be checked and contains no domain term.
    OutOfDomain,
    Proceed,
}

impl GateDecision {
    pub fn is_proceed(self) -> bool {
        matches!(self, Self::Proceed)
    }
}
