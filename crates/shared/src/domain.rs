use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Bubble,
    Selection,
    Insertion,
    Counting,
    Radix,
    Bucket,
    Merge,
    Quick,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 8] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Selection,
        AlgorithmKind::Insertion,
        AlgorithmKind::Counting,
        AlgorithmKind::Radix,
        AlgorithmKind::Bucket,
        AlgorithmKind::Merge,
        AlgorithmKind::Quick,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Counting => "counting",
            AlgorithmKind::Radix => "radix",
            AlgorithmKind::Bucket => "bucket",
            AlgorithmKind::Merge => "merge",
            AlgorithmKind::Quick => "quick",
        }
    }

    /// Fixed asymptotic label shown after a run. Not derived from counts.
    pub fn complexity(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble | AlgorithmKind::Selection | AlgorithmKind::Insertion => "O(n²)",
            AlgorithmKind::Counting | AlgorithmKind::Bucket => "O(n + k)",
            AlgorithmKind::Radix => "O(nk)",
            AlgorithmKind::Merge | AlgorithmKind::Quick => "O(n log n)",
        }
    }

    /// Value-distribution algorithms index auxiliary tables by value and
    /// cannot accept negative input.
    pub fn requires_non_negative(self) -> bool {
        matches!(
            self,
            AlgorithmKind::Counting | AlgorithmKind::Radix | AlgorithmKind::Bucket
        )
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownAlgorithm(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Compare,
    Swap,
    /// A single index read by a distribution pass. Not a comparison.
    Visit,
}

/// Per-bar color classification handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarState {
    #[default]
    Default,
    Compare,
    Swap,
    Settled,
}

impl From<StepKind> for BarState {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Compare | StepKind::Visit => BarState::Compare,
            StepKind::Swap => BarState::Swap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSummary {
    pub algorithm: AlgorithmKind,
    pub comparisons: u64,
    pub swaps: u64,
    pub steps: u64,
    pub complexity: String,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
