use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::mpsc;

use super::*;
use crate::{
    config::MAX_SPEED,
    reporter::{ChannelReporter, PacedReporter, RecordingReporter, Renderer},
};

fn fast() -> SortConfig {
    SortConfig::new(8, MAX_SPEED)
}

#[tokio::test]
async fn bubble_scenario_reports_count_and_label() {
    let mut session = Session::new(vec![5, 3, 8, 3, 1]);
    let mut reporter = RecordingReporter::default();

    let summary = session
        .run_sort(AlgorithmKind::Bubble, &fast(), &mut reporter)
        .await
        .expect("sort");

    assert_eq!(session.values(), &[1, 3, 3, 5, 8]);
    assert_eq!(summary.comparisons, 10);
    assert_eq!(summary.complexity, "O(n²)");
    assert_eq!(summary.algorithm, AlgorithmKind::Bubble);
    assert!(session.state().settled().is_complete());
    assert_eq!(session.last_summary(), Some(&summary));
}

#[tokio::test]
async fn final_render_shows_everything_settled() {
    let mut session = Session::new(vec![2, 9, 4]);
    let mut reporter = RecordingReporter::default();
    let summary = session
        .run_sort(AlgorithmKind::Merge, &fast(), &mut reporter)
        .await
        .expect("sort");

    let last = reporter.steps().last().expect("final frame");
    assert_eq!(last.highlight, None);
    assert_eq!(last.settled, 3);
    assert_eq!(reporter.steps().len() as u64, summary.steps + 1);
}

#[tokio::test]
async fn empty_and_single_inputs_complete_trivially() {
    for algorithm in AlgorithmKind::ALL {
        let mut empty = Session::new(Vec::new());
        let summary = empty
            .run_sort(algorithm, &fast(), &mut RecordingReporter::default())
            .await
            .expect("empty sort");
        assert_eq!(summary.comparisons, 0, "{algorithm}");
        assert!(empty.state().settled().is_complete());

        let mut single = Session::new(vec![42]);
        let summary = single
            .run_sort(algorithm, &fast(), &mut RecordingReporter::default())
            .await
            .expect("single sort");
        assert_eq!(summary.comparisons, 0, "{algorithm}");
        assert_eq!(single.values(), &[42]);
        assert!(single.state().settled().contains(0), "{algorithm}");
    }
}

#[tokio::test]
async fn resorting_sorted_output_moves_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for algorithm in [
        AlgorithmKind::Bubble,
        AlgorithmKind::Selection,
        AlgorithmKind::Insertion,
        AlgorithmKind::Quick,
    ] {
        let mut session = Session::generate(&SortConfig::new(40, MAX_SPEED), &mut rng).expect("session");
        session
            .run_sort(algorithm, &fast(), &mut RecordingReporter::default())
            .await
            .expect("first sort");
        let sorted = session.values().to_vec();

        let summary = session
            .run_sort(algorithm, &fast(), &mut RecordingReporter::default())
            .await
            .expect("second sort");
        assert_eq!(summary.swaps, 0, "{algorithm}");
        assert_eq!(session.values(), sorted.as_slice(), "{algorithm}");
    }
}

#[tokio::test]
async fn same_input_same_comparison_count() {
    let values = crate::generate_values(120, &mut ChaCha8Rng::seed_from_u64(3)).expect("values");
    for algorithm in AlgorithmKind::ALL {
        let mut first = Session::new(values.clone());
        let mut second = Session::new(values.clone());
        let a = first
            .run_sort(algorithm, &fast(), &mut RecordingReporter::default())
            .await
            .expect("sort");
        let b = second
            .run_sort(algorithm, &fast(), &mut RecordingReporter::default())
            .await
            .expect("sort");
        assert_eq!(a, b, "{algorithm}");
    }
}

#[tokio::test]
async fn unknown_algorithm_leaves_state_untouched() {
    let mut session = Session::new(vec![3, 1, 2]);
    let err = session
        .run_sort_named("bogo", &fast(), &mut RecordingReporter::default())
        .await
        .expect_err("should fail");

    assert!(matches!(err, EngineError::UnknownAlgorithm(_)));
    assert_eq!(session.values(), &[3, 1, 2]);
    assert!(session.last_summary().is_none());
}

#[tokio::test]
async fn named_dispatch_matches_kind() {
    let mut session = Session::new(vec![3, 1, 2]);
    let summary = session
        .run_sort_named("Quick", &fast(), &mut RecordingReporter::default())
        .await
        .expect("sort");
    assert_eq!(summary.algorithm, AlgorithmKind::Quick);
    assert_eq!(summary.complexity, "O(n log n)");
}

#[tokio::test]
async fn negative_values_rejected_before_reset() {
    let mut session = Session::new(vec![3, -1, 2]);
    let mut reporter = RecordingReporter::default();
    let err = session
        .run_sort(AlgorithmKind::Counting, &fast(), &mut reporter)
        .await
        .expect_err("should fail");

    assert!(matches!(err, EngineError::NegativeValue { index: 1, .. }));
    assert_eq!(session.values(), &[3, -1, 2]);
    assert!(reporter.steps().is_empty());
}

#[tokio::test]
async fn invalid_speed_is_a_configuration_error() {
    let mut session = Session::new(vec![2, 1]);
    let err = session
        .run_sort(
            AlgorithmKind::Bubble,
            &SortConfig::new(2, 0),
            &mut RecordingReporter::default(),
        )
        .await
        .expect_err("should fail");
    assert!(matches!(err, EngineError::InvalidSpeed { speed: 0, .. }));
}

#[tokio::test]
async fn delay_is_recomputed_per_sort() {
    let mut session = Session::new(vec![2, 1]);
    session
        .run_sort(
            AlgorithmKind::Bubble,
            &SortConfig::new(2, 100),
            &mut RecordingReporter::default(),
        )
        .await
        .expect("sort");
    assert_eq!(session.delay(), Duration::from_millis(5));

    session
        .run_sort(
            AlgorithmKind::Bubble,
            &SortConfig::new(2, MAX_SPEED),
            &mut RecordingReporter::default(),
        )
        .await
        .expect("sort");
    assert_eq!(session.delay(), Duration::from_millis(1));
}

#[tokio::test]
async fn regenerate_clears_progress() {
    let mut session = Session::new(vec![2, 1]);
    session
        .run_sort(AlgorithmKind::Bubble, &fast(), &mut RecordingReporter::default())
        .await
        .expect("sort");
    session.regenerate(vec![9, 8, 7]);

    assert_eq!(session.values(), &[9, 8, 7]);
    assert_eq!(session.state().settled().count(), 0);
    assert_eq!(session.state().comparisons(), 0);
    assert!(session.last_summary().is_none());
}

struct CountingRenderer {
    frames: Arc<AtomicUsize>,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {
        self.frames.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn paced_reporter_renders_every_step() {
    let frames = Arc::new(AtomicUsize::new(0));
    let mut reporter = PacedReporter::new(CountingRenderer {
        frames: frames.clone(),
    });
    let mut session = Session::new(vec![4, 3, 2, 1]);

    let summary = session
        .run_sort(AlgorithmKind::Selection, &fast(), &mut reporter)
        .await
        .expect("sort");

    assert_eq!(frames.load(Ordering::SeqCst) as u64, summary.steps + 1);
}

#[tokio::test]
async fn channel_reporter_waits_for_each_frame_to_be_drawn() {
    let (frames, mut frames_rx) = mpsc::channel(1);
    let sort = tokio::spawn(async move {
        let mut session = Session::new(vec![8, 7, 6, 5, 4, 3, 2, 1]);
        let mut reporter = ChannelReporter::new(frames);
        session
            .run_sort(AlgorithmKind::Bubble, &fast(), &mut reporter)
            .await
    });

    let first = frames_rx.recv().await.expect("first frame");
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(!sort.is_finished());
    assert!(frames_rx.try_recv().is_err());
    first.mark_drawn();

    // A slow consumer slows the sort down; nothing is skipped.
    let mut drawn = 1u64;
    while let Some(frame) = frames_rx.recv().await {
        tokio::time::sleep(Duration::from_millis(1)).await;
        frame.mark_drawn();
        drawn += 1;
    }
    let summary = sort.await.expect("join").expect("sort");
    assert_eq!(drawn, summary.steps + 1);
}

#[tokio::test]
async fn channel_reporter_without_consumer_still_completes() {
    let (frames, frames_rx) = mpsc::channel(1);
    drop(frames_rx);
    let mut session = Session::new(vec![3, 1, 2]);
    let summary = session
        .run_sort(AlgorithmKind::Quick, &fast(), &mut ChannelReporter::new(frames))
        .await
        .expect("sort");
    assert_eq!(session.values(), &[1, 2, 3]);
    assert!(summary.steps > 0);
}
