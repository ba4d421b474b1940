use serde::{Deserialize, Serialize};

use crate::{
    domain::{AlgorithmKind, BarState, SortSummary},
    error::ErrorReport,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub values: Vec<i64>,
    pub bars: Vec<BarState>,
    pub comparisons: u64,
}

impl FrameSnapshot {
    pub fn settled_count(&self) -> usize {
        self.bars
            .iter()
            .filter(|bar| **bar == BarState::Settled)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SortEvent {
    Generated {
        values: Vec<i64>,
    },
    Started {
        algorithm: AlgorithmKind,
        len: usize,
    },
    Frame(FrameSnapshot),
    Completed(SortSummary),
    Failed(ErrorReport),
    Aborted {
        algorithm: AlgorithmKind,
    },
}

impl SortEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SortEvent::Completed(_) | SortEvent::Failed(_) | SortEvent::Aborted { .. }
        )
    }
}
