use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Aggregation bucket: (year, month). Serializes as a 2-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period(pub i32, pub u32);

impl Period {
    pub fn year(&self) -> i32 {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.1
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionKind {
    #[serde(rename = "issue")]
    Issue,
    #[serde(rename = "pr")]
    PullRequest,
}

/// One normalized contribution event. Immutable once created; the flat
/// record list is the only persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    #[serde(rename = "date")]
    pub period: Period,
    pub user: String,
    #[serde(rename = "type")]
    pub kind: ContributionKind,
}

/// Distinct contributing users for one run of adjacent same-period records.
/// Recomputed from scratch every run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodActivity {
    pub period: Period,
    pub active_users: BTreeSet<String>,
}
