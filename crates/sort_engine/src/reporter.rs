//! Suspension points between the algorithms and whatever draws them.

use std::time::Duration;

use async_trait::async_trait;
use shared::{domain::StepKind, protocol::FrameSnapshot};
use tokio::sync::{mpsc, oneshot};

use crate::sequence::{Highlight, SequenceState};

/// One renderable view of the sequence, borrowed for the duration of a step.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub state: &'a SequenceState,
    pub highlight: Option<Highlight>,
}

impl<'a> Frame<'a> {
    pub fn new(state: &'a SequenceState, highlight: Option<Highlight>) -> Self {
        Self { state, highlight }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.state.snapshot(self.highlight)
    }
}

/// Receives every visualized step. The sort does not continue until
/// `present` resolves, so an implementation paces the animation by awaiting.
#[async_trait]
pub trait StepReporter: Send {
    async fn present(&mut self, frame: Frame<'_>, delay: Duration);
}

/// Synchronous drawing surface used by [`PacedReporter`].
pub trait Renderer: Send {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Renders each frame, then sleeps for the session delay.
pub struct PacedReporter<R> {
    renderer: R,
}

impl<R: Renderer> PacedReporter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn into_inner(self) -> R {
        self.renderer
    }
}

#[async_trait]
impl<R: Renderer> StepReporter for PacedReporter<R> {
    async fn present(&mut self, frame: Frame<'_>, delay: Duration) {
        self.renderer.render(&frame);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStep {
    pub highlight: Option<Highlight>,
    pub settled: usize,
    pub comparisons: u64,
}

/// Captures steps without pausing.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    steps: Vec<RecordedStep>,
}

impl RecordingReporter {
    pub fn steps(&self) -> &[RecordedStep] {
        &self.steps
    }

    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.steps
            .iter()
            .filter(|step| step.highlight.is_some_and(|h| h.kind == kind))
            .count()
    }

    pub fn refreshes(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.highlight.is_none())
            .count()
    }
}

#[async_trait]
impl StepReporter for RecordingReporter {
    async fn present(&mut self, frame: Frame<'_>, _delay: Duration) {
        self.steps.push(RecordedStep {
            highlight: frame.highlight,
            settled: frame.state.settled().count(),
            comparisons: frame.state.comparisons(),
        });
    }
}

/// A frame handed to another task for drawing. The sort that produced it
/// stays suspended until the frame is marked drawn or dropped.
#[derive(Debug)]
pub struct PendingFrame {
    snapshot: FrameSnapshot,
    drawn: oneshot::Sender<()>,
}

impl PendingFrame {
    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    /// True once the sort waiting on this frame has gone away (aborted).
    pub fn is_cancelled(&self) -> bool {
        self.drawn.is_closed()
    }

    pub fn mark_drawn(self) {
        let _ = self.drawn.send(());
    }
}

/// Hands each frame to a drawing task over a bounded channel, waits for it
/// to be drawn, then sleeps for the step delay.
///
/// At most one frame per sort is in flight, so a slow consumer slows the
/// sort down instead of losing frames. If the consumer is gone the sort
/// still runs to completion at the configured pace.
pub struct ChannelReporter {
    frames: mpsc::Sender<PendingFrame>,
}

impl ChannelReporter {
    pub fn new(frames: mpsc::Sender<PendingFrame>) -> Self {
        Self { frames }
    }
}

#[async_trait]
impl StepReporter for ChannelReporter {
    async fn present(&mut self, frame: Frame<'_>, delay: Duration) {
        let (drawn, drawn_rx) = oneshot::channel();
        let pending = PendingFrame {
            snapshot: frame.snapshot(),
            drawn,
        };
        if self.frames.send(pending).await.is_ok() {
            // Err means the consumer dropped the frame without drawing it.
            let _ = drawn_rx.await;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
