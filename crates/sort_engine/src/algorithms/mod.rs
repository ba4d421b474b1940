//! Instrumented sorting routines.
//!
//! Every routine drives a [`SortContext`]: value comparisons go through
//! [`SortContext::compare`], single-index reads through
//! [`SortContext::visit`], visible exchanges through
//! [`SortContext::report_swap`], and plain render-and-pause steps through
//! [`SortContext::refresh`]. Each of those awaits the session's reporter.

use std::time::Duration;

use shared::domain::{AlgorithmKind, StepKind};

use crate::{
    error::EngineError,
    reporter::{Frame, StepReporter},
    sequence::{Highlight, SequenceState},
};

mod comparison;
mod distribution;
mod divide;

pub(crate) struct SortContext<'a> {
    state: &'a mut SequenceState,
    reporter: &'a mut dyn StepReporter,
    delay: Duration,
    swaps: u64,
    steps: u64,
}

impl<'a> SortContext<'a> {
    pub(crate) fn new(
        state: &'a mut SequenceState,
        reporter: &'a mut dyn StepReporter,
        delay: Duration,
    ) -> Self {
        Self {
            state,
            reporter,
            delay,
            swaps: 0,
            steps: 0,
        }
    }

    /// `(swaps, steps)` recorded so far.
    pub(crate) fn counters(&self) -> (u64, u64) {
        (self.swaps, self.steps)
    }

    fn len(&self) -> usize {
        self.state.len()
    }

    fn values(&self) -> &[i64] {
        self.state.values()
    }

    fn value(&self, index: usize) -> i64 {
        self.state.values()[index]
    }

    fn set(&mut self, index: usize, value: i64) {
        self.state.values_mut()[index] = value;
    }

    fn settle(&mut self, index: usize) {
        self.state.settled_mut().settle(index);
    }

    fn settle_all(&mut self) {
        self.state.settled_mut().settle_all();
    }

    /// Exchanges two slots. Only exchanges that move a value count as swaps.
    fn exchange(&mut self, first: usize, second: usize) {
        let values = self.state.values_mut();
        if first != second && values[first] != values[second] {
            self.swaps += 1;
        }
        values.swap(first, second);
    }

    /// Counts one comparison and reports it before the caller acts on it.
    async fn compare(&mut self, first: usize, second: usize) {
        self.state.count_comparison();
        self.step(Some(Highlight::new(first, second, StepKind::Compare)))
            .await;
    }

    /// Highlights one index without counting a comparison.
    async fn visit(&mut self, index: usize) {
        self.step(Some(Highlight::new(index, index, StepKind::Visit)))
            .await;
    }

    async fn report_swap(&mut self, first: usize, second: usize) {
        self.step(Some(Highlight::new(first, second, StepKind::Swap)))
            .await;
    }

    async fn refresh(&mut self) {
        self.step(None).await;
    }

    async fn step(&mut self, highlight: Option<Highlight>) {
        self.steps += 1;
        let delay = self.delay;
        let frame = Frame::new(&*self.state, highlight);
        self.reporter.present(frame, delay).await;
    }
}

/// Rejects input an algorithm cannot index, before any state is touched.
pub(crate) fn validate_input(algorithm: AlgorithmKind, values: &[i64]) -> Result<(), EngineError> {
    distribution::validate_input(algorithm, values)
}

pub(crate) async fn run(algorithm: AlgorithmKind, ctx: &mut SortContext<'_>) {
    match algorithm {
        AlgorithmKind::Bubble => comparison::bubble(ctx).await,
        AlgorithmKind::Selection => comparison::selection(ctx).await,
        AlgorithmKind::Insertion => comparison::insertion(ctx).await,
        AlgorithmKind::Counting => distribution::counting(ctx).await,
        AlgorithmKind::Radix => distribution::radix(ctx).await,
        AlgorithmKind::Bucket => distribution::bucket(ctx).await,
        AlgorithmKind::Merge => divide::merge(ctx).await,
        AlgorithmKind::Quick => divide::quick(ctx).await,
    }
}

#[cfg(test)]
#[path = "../tests/algorithms_tests.rs"]
mod tests;
