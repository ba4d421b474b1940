use shared::{
    domain::{BarState, StepKind},
    protocol::FrameSnapshot,
};

/// Indices whose final sorted value is already in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettledSet {
    flags: Vec<bool>,
    count: usize,
}

impl SettledSet {
    pub fn with_len(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    /// Marks `index` settled. Returns `true` when it was not settled before.
    pub fn settle(&mut self, index: usize) -> bool {
        let flag = &mut self.flags[index];
        if *flag {
            return false;
        }
        *flag = true;
        self.count += 1;
        true
    }

    pub fn settle_all(&mut self) {
        self.flags.fill(true);
        self.count = self.flags.len();
    }

    pub fn clear(&mut self) {
        self.flags.fill(false);
        self.count = 0;
    }

    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_complete(&self) -> bool {
        self.count == self.flags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(index, settled)| settled.then_some(index))
    }
}

/// Transient pair highlight attached to one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub first: usize,
    pub second: usize,
    pub kind: StepKind,
}

impl Highlight {
    pub fn new(first: usize, second: usize, kind: StepKind) -> Self {
        Self {
            first,
            second,
            kind,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SequenceState {
    values: Vec<i64>,
    settled: SettledSet,
    comparisons: u64,
}

impl SequenceState {
    pub fn new(values: Vec<i64>) -> Self {
        let settled = SettledSet::with_len(values.len());
        Self {
            values,
            settled,
            comparisons: 0,
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn settled(&self) -> &SettledSet {
        &self.settled
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Color classification for every bar; settled always wins over a highlight.
    pub fn bar_states(&self, highlight: Option<Highlight>) -> Vec<BarState> {
        let mut bars: Vec<BarState> = (0..self.values.len())
            .map(|index| {
                if self.settled.contains(index) {
                    BarState::Settled
                } else {
                    BarState::Default
                }
            })
            .collect();

        if let Some(highlight) = highlight {
            for index in [highlight.first, highlight.second] {
                if let Some(bar) = bars.get_mut(index) {
                    if *bar != BarState::Settled {
                        *bar = highlight.kind.into();
                    }
                }
            }
        }
        bars
    }

    pub fn snapshot(&self, highlight: Option<Highlight>) -> FrameSnapshot {
        FrameSnapshot {
            values: self.values.clone(),
            bars: self.bar_states(highlight),
            comparisons: self.comparisons,
        }
    }

    pub(crate) fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    pub(crate) fn settled_mut(&mut self) -> &mut SettledSet {
        &mut self.settled
    }

    pub(crate) fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Clears per-sort progress while keeping the values.
    pub(crate) fn reset_progress(&mut self) {
        self.settled.clear();
        self.comparisons = 0;
    }
}

#[cfg(test)]
#[path = "tests/sequence_tests.rs"]
mod tests;
