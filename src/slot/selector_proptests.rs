use super::*;
use crate::slot::host::RecordingHost;
use crate::slot::label::LABEL_COUNT;
use proptest::prelude::*;

/// 選択リストに対する1操作
#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize),
    Quick(usize),
    Remove(usize),
}

fn label_index() -> impl Strategy<Value = usize> {
    0..LABEL_COUNT
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (label_index(), label_index()).prop_map(|(s, e)| Op::Add(s, e)),
        (0..QuickPreset::all().len()).prop_map(Op::Quick),
        (0..8usize).prop_map(Op::Remove),
    ]
}

fn label_at(index: usize) -> TimeLabel {
    TimeLabel::from_index(index).unwrap()
}

/// 操作列を適用し、同じ操作を Vec で素朴に再現した結果と並べて返す
fn apply(ops: &[Op]) -> (TimeRangeSelector, Vec<String>) {
    let mut selector = TimeRangeSelector::opened("Monday");
    let mut expected: Vec<String> = Vec::new();

    for op in ops {
        match op {
            Op::Add(s, e) => {
                selector.set_candidate_start(label_at(*s));
                selector.set_candidate_end(label_at(*e));
                selector.add_candidate_range();
                let value = format!("{}-{}", label_at(*s), label_at(*e));
                if s < e && !expected.contains(&value) {
                    expected.push(value);
                }
            }
            Op::Quick(i) => {
                let preset = QuickPreset::all()[*i];
                selector.add_quick_range(preset);
                let value = preset.as_str().to_string();
                if !expected.contains(&value) {
                    expected.push(value);
                }
            }
            Op::Remove(i) => {
                if let Some(value) = expected.get(*i).cloned() {
                    selector.remove_range(&value);
                    expected.retain(|v| v != &value);
                }
            }
        }
    }

    (selector, expected)
}

proptest! {
    /// 開始 < 終了なら "start-end" がちょうど1回含まれる
    #[test]
    fn prop_valid_candidate_is_added_once(s in label_index(), e in label_index()) {
        prop_assume!(s < e);
        let mut selector = TimeRangeSelector::opened("Monday");
        selector.set_candidate_start(label_at(s));
        selector.set_candidate_end(label_at(e));

        selector.add_candidate_range();
        selector.add_candidate_range();

        let value = format!("{}-{}", label_at(s), label_at(e));
        let count = selector.selection().iter().filter(|v| **v == value).count();
        prop_assert_eq!(count, 1);
    }

    /// 開始 >= 終了なら選択リストは変わらない
    #[test]
    fn prop_invalid_candidate_leaves_selection_unchanged(
        s in label_index(),
        e in label_index(),
        ops in prop::collection::vec(op_strategy(), 0..10)
    ) {
        prop_assume!(s >= e);
        let (mut selector, _) = apply(&ops);
        let before = selector.selection().to_vec();

        selector.set_candidate_start(label_at(s));
        selector.set_candidate_end(label_at(e));
        prop_assert!(!selector.add_candidate_range());

        prop_assert_eq!(selector.selection(), before.as_slice());
    }

    /// 任意の操作列の後でも重複はなく、挿入順どおり
    #[test]
    fn prop_selection_has_no_duplicates(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let (selector, expected) = apply(&ops);
        let mut sorted = selector.selection().to_vec();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), selector.selection().len());
        prop_assert_eq!(selector.selection(), expected.as_slice());
    }

    /// 存在しない値の削除は何もしない
    #[test]
    fn prop_remove_absent_is_noop(ops in prop::collection::vec(op_strategy(), 0..20), s in label_index()) {
        let (mut selector, _) = apply(&ops);
        let value = format!("{}-{}", label_at(s), label_at(s));
        let before = selector.selection().to_vec();

        prop_assert!(!selector.remove_range(&value));
        prop_assert_eq!(selector.selection(), before.as_slice());
    }

    /// commit は蓄積した列をそのまま渡し、初期状態に戻る
    #[test]
    fn prop_commit_delivers_and_resets(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let (mut selector, expected) = apply(&ops);
        let mut host = RecordingHost::new();

        selector.commit(&mut host);

        prop_assert_eq!(host.saved.len(), 1);
        prop_assert_eq!(&host.saved[0].slots, &expected);
        prop_assert_eq!(host.close_count, 1);
        prop_assert_eq!(selector, TimeRangeSelector::new());
    }

    /// cancel は保存せず、commit と同じ初期状態に戻る
    #[test]
    fn prop_cancel_resets_like_commit(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let (mut cancelled, _) = apply(&ops);
        let (mut committed, _) = apply(&ops);
        let mut host = RecordingHost::new();

        cancelled.cancel(&mut host);
        prop_assert!(host.saved.is_empty());

        committed.commit(&mut RecordingHost::new());
        prop_assert_eq!(cancelled, committed);
    }
}
