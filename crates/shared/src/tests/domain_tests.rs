use super::*;
use crate::protocol::SortEvent;

#[test]
fn parses_tags_case_insensitively() {
    assert_eq!("Bubble".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Bubble));
    assert_eq!(" quick ".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Quick));
    for kind in AlgorithmKind::ALL {
        assert_eq!(kind.as_str().parse::<AlgorithmKind>(), Ok(kind));
    }
}

#[test]
fn rejects_unknown_tag() {
    let err = "bogo".parse::<AlgorithmKind>().expect_err("should fail");
    assert_eq!(err.0, "bogo");
    assert!(err.to_string().contains("unknown algorithm 'bogo'"));
}

#[test]
fn complexity_labels_are_fixed() {
    assert_eq!(AlgorithmKind::Bubble.complexity(), "O(n²)");
    assert_eq!(AlgorithmKind::Selection.complexity(), "O(n²)");
    assert_eq!(AlgorithmKind::Insertion.complexity(), "O(n²)");
    assert_eq!(AlgorithmKind::Counting.complexity(), "O(n + k)");
    assert_eq!(AlgorithmKind::Bucket.complexity(), "O(n + k)");
    assert_eq!(AlgorithmKind::Radix.complexity(), "O(nk)");
    assert_eq!(AlgorithmKind::Merge.complexity(), "O(n log n)");
    assert_eq!(AlgorithmKind::Quick.complexity(), "O(n log n)");
}

#[test]
fn events_serialize_with_type_tag() {
    let event = SortEvent::Aborted {
        algorithm: AlgorithmKind::Radix,
    };
    let json = serde_json::to_value(&event).expect("serialize");
    assert_eq!(json["type"], "aborted");
    assert_eq!(json["payload"]["algorithm"], "radix");

    let bar = serde_json::to_value(BarState::Settled).expect("serialize");
    assert_eq!(bar, "settled");
}

#[test]
fn visits_share_the_compare_color() {
    assert_eq!(BarState::from(StepKind::Visit), BarState::Compare);
    assert_eq!(BarState::from(StepKind::Compare), BarState::Compare);
    assert_eq!(BarState::from(StepKind::Swap), BarState::Swap);
}
