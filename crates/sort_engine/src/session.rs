use std::time::Duration;

use rand::Rng;
use shared::domain::{AlgorithmKind, SortSummary};
use tracing::{debug, info};

use crate::{
    algorithms::{self, SortContext},
    config::{validate_speed, SortConfig},
    error::EngineError,
    generate::generate_values,
    reporter::{Frame, StepReporter},
    sequence::SequenceState,
};

/// Exclusive owner of one sequence and its per-sort progress.
///
/// `run_sort` borrows the session mutably for the whole animated trace, so a
/// second sort on the same session cannot start until the first resolves.
#[derive(Debug, Default)]
pub struct Session {
    state: SequenceState,
    delay: Duration,
    last_summary: Option<SortSummary>,
}

impl Session {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            state: SequenceState::new(values),
            delay: Duration::ZERO,
            last_summary: None,
        }
    }

    pub fn generate<R: Rng + ?Sized>(config: &SortConfig, rng: &mut R) -> Result<Self, EngineError> {
        Ok(Self::new(generate_values(config.size, rng)?))
    }

    /// Replaces the sequence and clears settled marks, counter and summary.
    pub fn regenerate(&mut self, values: Vec<i64>) {
        self.state = SequenceState::new(values);
        self.last_summary = None;
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    pub fn values(&self) -> &[i64] {
        self.state.values()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn last_summary(&self) -> Option<&SortSummary> {
        self.last_summary.as_ref()
    }

    /// Checks everything `run_sort` would reject, without touching state.
    pub fn preflight(&self, algorithm: AlgorithmKind, config: &SortConfig) -> Result<(), EngineError> {
        validate_speed(config.speed)?;
        algorithms::validate_input(algorithm, self.state.values())
    }

    pub async fn run_sort_named(
        &mut self,
        algorithm: &str,
        config: &SortConfig,
        reporter: &mut dyn StepReporter,
    ) -> Result<SortSummary, EngineError> {
        let algorithm = algorithm.parse::<AlgorithmKind>()?;
        self.run_sort(algorithm, config, reporter).await
    }

    pub async fn run_sort(
        &mut self,
        algorithm: AlgorithmKind,
        config: &SortConfig,
        reporter: &mut dyn StepReporter,
    ) -> Result<SortSummary, EngineError> {
        self.preflight(algorithm, config)?;

        self.delay = config.delay();
        self.state.reset_progress();
        debug!(
            %algorithm,
            len = self.state.len(),
            delay_ms = self.delay.as_millis() as u64,
            "starting sort"
        );

        let (swaps, steps) = {
            let mut ctx = SortContext::new(&mut self.state, &mut *reporter, self.delay);
            algorithms::run(algorithm, &mut ctx).await;
            ctx.counters()
        };

        self.state.settled_mut().settle_all();
        reporter
            .present(Frame::new(&self.state, None), Duration::ZERO)
            .await;

        let summary = SortSummary {
            algorithm,
            comparisons: self.state.comparisons(),
            swaps,
            steps,
            complexity: algorithm.complexity().to_string(),
        };
        info!(
            %algorithm,
            comparisons = summary.comparisons,
            swaps = summary.swaps,
            steps = summary.steps,
            "sort completed"
        );
        self.last_summary = Some(summary.clone());
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
