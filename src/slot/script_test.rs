use super::*;
use crate::slot::host::RecordingHost;

fn label(s: &str) -> TimeLabel {
    s.parse().unwrap()
}

// ============================================================================
// パース
// ============================================================================

#[test]
fn parses_every_token_kind() {
    let actions = parse_actions(&[
        "start=08:00",
        "end=08:30",
        "add",
        "add=10:00-12:00",
        "quick=17:00-18:00",
        "remove=10:00-12:00",
        "commit",
        "cancel",
    ])
    .unwrap();

    assert_eq!(
        actions,
        vec![
            Action::SetStart(label("08:00")),
            Action::SetEnd(label("08:30")),
            Action::AddCandidate,
            Action::AddRange(label("10:00"), label("12:00")),
            Action::Quick(QuickPreset::Evening),
            Action::Remove("10:00-12:00".parse().unwrap()),
            Action::Commit,
            Action::Cancel,
        ]
    );
}

#[test]
fn empty_start_or_end_clears_candidate() {
    assert_eq!("start=".parse::<Action>().unwrap(), Action::ClearStart);
    assert_eq!("end=".parse::<Action>().unwrap(), Action::ClearEnd);
}

#[test]
fn cleared_candidate_blocks_add() {
    let actions = parse_actions(&["end=", "add", "end=11:00", "add", "commit"]).unwrap();
    let mut selector = TimeRangeSelector::opened("Monday");
    let mut host = RecordingHost::new();

    run_script(&mut selector, &actions, &mut host).unwrap();

    assert_eq!(host.last_saved().unwrap().slots, ["09:00-11:00"]);
}

#[test]
fn add_range_accepts_reversed_order() {
    let action: Action = "add=12:00-10:00".parse().unwrap();
    assert_eq!(action, Action::AddRange(label("12:00"), label("10:00")));
}

#[test]
fn display_round_trips_tokens() {
    for token in ["start=09:30", "end=", "add", "add=12:00-10:00", "quick=09:00-12:00", "cancel"] {
        assert_eq!(token.parse::<Action>().unwrap().to_string(), token);
    }
}

#[test]
fn rejects_unknown_or_malformed_tokens() {
    assert!(matches!(
        "save".parse::<Action>(),
        Err(PcError::InvalidAction(_))
    ));
    assert!(matches!(
        "commit=now".parse::<Action>(),
        Err(PcError::InvalidAction(_))
    ));
    assert!(matches!(
        "start".parse::<Action>(),
        Err(PcError::InvalidAction(_))
    ));
    assert!(matches!(
        "start=9".parse::<Action>(),
        Err(PcError::InvalidTimeLabel(_))
    ));
    assert!(matches!(
        "add=09:00".parse::<Action>(),
        Err(PcError::InvalidTimeRange(_))
    ));
    assert!(matches!(
        "quick=09:00-10:00".parse::<Action>(),
        Err(PcError::UnknownPreset(_))
    ));
    assert!(matches!(
        "remove=10:00-09:00".parse::<Action>(),
        Err(PcError::InvalidTimeRange(_))
    ));
}

// ============================================================================
// 適用
// ============================================================================

#[test]
fn worked_example_commits_remaining_preset() {
    let actions = parse_actions(&[
        "add=09:00-10:00",
        "quick=14:00-17:00",
        "remove=09:00-10:00",
        "commit",
    ])
    .unwrap();
    let mut selector = TimeRangeSelector::opened("Monday");
    let mut host = RecordingHost::new();

    run_script(&mut selector, &actions, &mut host).unwrap();

    assert_eq!(host.last_saved().unwrap().slots, ["14:00-17:00"]);
    assert_eq!(host.close_count, 1);
    assert!(!selector.is_open());
}

#[test]
fn reversed_add_is_ignored() {
    let actions = parse_actions(&["add=12:00-10:00", "commit"]).unwrap();
    let mut selector = TimeRangeSelector::opened("Monday");
    let mut host = RecordingHost::new();

    run_script(&mut selector, &actions, &mut host).unwrap();

    assert!(host.last_saved().unwrap().slots.is_empty());
}

#[test]
fn missing_commit_cancels_at_end() {
    let actions = parse_actions(&["quick=09:00-12:00"]).unwrap();
    let mut selector = TimeRangeSelector::opened("Monday");
    let mut host = RecordingHost::new();

    run_script(&mut selector, &actions, &mut host).unwrap();

    assert!(host.saved.is_empty());
    assert_eq!(host.close_count, 1);
    assert_eq!(selector, TimeRangeSelector::new());
}

#[test]
fn actions_after_close_are_rejected() {
    let actions = parse_actions(&["cancel", "add"]).unwrap();
    let mut selector = TimeRangeSelector::opened("Monday");
    let mut host = RecordingHost::new();

    let err = run_script(&mut selector, &actions, &mut host).unwrap_err();

    assert!(matches!(err, PcError::SelectorClosed(ref a) if a == "add"));
    assert_eq!(host.close_count, 1);
}

#[test]
fn start_and_end_then_add_uses_candidates() {
    let actions = parse_actions(&["start=07:00", "end=07:30", "add", "commit"]).unwrap();
    let mut selector = TimeRangeSelector::opened("Saturday");
    let mut host = RecordingHost::new();

    run_script(&mut selector, &actions, &mut host).unwrap();

    let saved = host.last_saved().unwrap();
    assert_eq!(saved.day, "Saturday");
    assert_eq!(saved.slots, ["07:00-07:30"]);
}
