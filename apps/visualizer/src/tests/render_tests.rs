use shared::domain::AlgorithmKind;
use sort_engine::{PacedReporter, Session, SortConfig};

use super::*;

fn frame(values: Vec<i64>, bars: Vec<BarState>) -> FrameSnapshot {
    FrameSnapshot {
        values,
        bars,
        comparisons: 3,
    }
}

#[test]
fn heights_scale_to_tallest_bar() {
    assert_eq!(bar_heights(&[204, 102, 1, 0]), vec![BAR_ROWS, 8, 1, 0]);
    assert_eq!(bar_heights(&[]), Vec::<usize>::new());
    assert_eq!(bar_heights(&[-4, 0]), vec![0, 0]);
}

#[test]
fn plain_chart_has_one_line_per_row() {
    let chart = draw_bars(
        &frame(vec![16, 8], vec![BarState::Default, BarState::Settled]),
        false,
    );
    let lines: Vec<&str> = chart.lines().collect();
    assert_eq!(lines.len(), BAR_ROWS + 1);
    assert_eq!(lines[0], "█ ");
    assert_eq!(lines[BAR_ROWS - 1], "██");
    assert_eq!(lines[BAR_ROWS], "comparisons: 3");
}

#[test]
fn colored_chart_switches_color_per_state() {
    let chart = draw_bars(
        &frame(
            vec![16, 16, 16],
            vec![BarState::Compare, BarState::Compare, BarState::Settled],
        ),
        true,
    );
    let top = chart.lines().next().expect("row");
    assert_eq!(top, "\x1b[33m██\x1b[32m█\x1b[0m");
}

#[test]
fn summary_line_names_algorithm_and_label() {
    let summary = SortSummary {
        algorithm: AlgorithmKind::Merge,
        comparisons: 12,
        swaps: 0,
        steps: 30,
        complexity: "O(n log n)".into(),
    };
    assert_eq!(
        describe_summary(&summary),
        "merge sort: 12 comparisons, 0 swaps, 30 steps, complexity O(n log n)"
    );
}

#[tokio::test]
async fn json_renderer_emits_one_frame_per_step() {
    let mut reporter = PacedReporter::new(JsonRenderer::new(Vec::new()));
    let mut session = Session::new(vec![3, 1, 2]);
    let summary = session
        .run_sort(AlgorithmKind::Quick, &SortConfig::new(3, 104), &mut reporter)
        .await
        .expect("sort");

    let output = String::from_utf8(reporter.into_inner().into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len() as u64, summary.steps + 1);

    let last: SortEvent = serde_json::from_str(lines.last().expect("line")).expect("json");
    match last {
        SortEvent::Frame(frame) => {
            assert_eq!(frame.values, vec![1, 2, 3]);
            assert_eq!(frame.settled_count(), 3);
        }
        other => panic!("unexpected event {other:?}"),
    }
}
