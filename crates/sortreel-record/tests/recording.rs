//! Integration test: recording real algorithms and annotation persistence.
//!
//! Runs the reference algorithms from `sortreel-test-utils` through the
//! recorder and checks the verdict on the `Final` frame. A property test
//! then drives the recorder with arbitrary operation sequences and
//! verifies that the annotation state at every position matches the most
//! recent un-cleared mark.

use std::ops::Range;

use proptest::prelude::*;
use sortreel_core::{Frame, RecordError};
use sortreel_record::{record, record_algorithm, Recorder, Timeline};
use sortreel_test_utils::{
    reversed, scrambled, with_duplicates, BubbleSort, EarlyExitSort, InsertionSort,
    OutOfBoundsAlgorithm, SelectionSort,
};

// ── Reference algorithms ─────────────────────────────────────────────

#[test]
fn reference_sorts_produce_sorted_verdict() {
    let inputs = [
        reversed(12),
        scrambled(17, 3),
        with_duplicates(20, 4),
        Vec::new(),
        vec![7],
    ];
    for items in inputs {
        let mut expected = items.clone();
        expected.sort_unstable();

        for (name, recording) in [
            ("bubble", record_algorithm(items.clone(), &BubbleSort)),
            ("insertion", record_algorithm(items.clone(), &InsertionSort)),
            ("selection", record_algorithm(items.clone(), &SelectionSort)),
        ] {
            let recording = recording.unwrap();
            assert_eq!(recording.timeline().verdict(), Some(true), "{name}");
            assert!(recording.is_sorted(), "{name}");
            assert_eq!(recording.buffer().as_slice(), expected.as_slice(), "{name}");
            assert!(recording.timeline().is_finished(), "{name}");
        }
    }
}

#[test]
fn early_exit_produces_failed_verdict() {
    let recording = record_algorithm(reversed(10), &EarlyExitSort { passes: 1 }).unwrap();
    assert_eq!(recording.timeline().verdict(), Some(false));
    assert!(!recording.is_sorted());

    let last = recording.timeline().last_index();
    let view = recording.timeline().frame(last).unwrap();
    assert_eq!(
        view.describe(recording.buffer().as_slice()).as_deref(),
        Some("The array is NOT sorted: the algorithm left items out of order."),
    );
}

#[test]
fn out_of_bounds_aborts_the_recording() {
    let result = record_algorithm(reversed(5), &OutOfBoundsAlgorithm {
        compares_before_failure: 3,
    });
    match result {
        Err(RecordError::IndexOutOfBounds { index: 5, len: 5 }) => {}
        other => panic!("expected IndexOutOfBounds, got {other:?}"),
    }
}

#[test]
fn compare_count_matches_recorded_frames() {
    let mut compares = 0usize;
    let recording = record(scrambled(9, 4), |rec| {
        let n = rec.len();
        for i in 0..n {
            for j in i + 1..n {
                compares += 1;
                if rec.compare(i, j)?.is_gt() {
                    rec.swap(i, j)?;
                }
            }
        }
        Ok(())
    })
    .unwrap();

    let stats = recording.timeline().stats();
    assert_eq!(stats.compares, compares);
    assert!(recording.is_sorted());
}

// ── Sticky annotations ───────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Op {
    Compare(usize, usize),
    Swap(usize, usize),
    MarkValue(u32),
    UnmarkValue,
    MarkRange(usize, usize),
    UnmarkRange,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..64, 0usize..64).prop_map(|(i, j)| Op::Compare(i, j)),
        (0usize..64, 0usize..64).prop_map(|(i, j)| Op::Swap(i, j)),
        (0u32..100).prop_map(Op::MarkValue),
        Just(Op::UnmarkValue),
        (0usize..64, 0usize..64).prop_map(|(a, b)| Op::MarkRange(a.min(b), a.max(b))),
        Just(Op::UnmarkRange),
    ]
}

/// What the annotation state should be after each frame.
#[derive(Clone, Debug, Default, PartialEq)]
struct Expected {
    value: Option<(u32, String)>,
    range: Option<(Range<usize>, String)>,
}

/// Feed `ops` to `rec`, returning the expected state at every position
/// before `Final`. Unmarks with nothing active are skipped.
fn drive(rec: &mut Recorder<u32>, ops: &[Op]) -> Result<Vec<Expected>, RecordError> {
    let n = rec.len();
    let mut state = Expected::default();
    let mut history = vec![state.clone()];
    for (k, op) in ops.iter().enumerate() {
        match *op {
            Op::Compare(i, j) => {
                rec.compare(i % n, j % n)?;
            }
            Op::Swap(i, j) => rec.swap(i % n, j % n)?,
            Op::MarkValue(v) => {
                let label = format!("value-{k}");
                rec.mark_value(v, label.clone());
                state.value = Some((v, label));
            }
            Op::UnmarkValue => {
                if state.value.is_none() {
                    assert_eq!(rec.unmark_value(), Err(RecordError::NoActiveValueMark));
                    continue;
                }
                rec.unmark_value()?;
                state.value = None;
            }
            Op::MarkRange(lo, hi) => {
                let label = format!("range-{k}");
                rec.mark_range(lo, hi, label.clone());
                state.range = Some((lo..hi, label));
            }
            Op::UnmarkRange => {
                if state.range.is_none() {
                    assert_eq!(rec.unmark_range(), Err(RecordError::NoActiveRangeMark));
                    continue;
                }
                rec.unmark_range()?;
                state.range = None;
            }
        }
        history.push(state.clone());
    }
    Ok(history)
}

fn observed(timeline: &Timeline<u32>, position: usize) -> Expected {
    let view = timeline.frame(position).unwrap();
    Expected {
        value: view.marked_value().map(|(v, l)| (*v, l.to_owned())),
        range: view.marked_range().map(|(r, l)| (r.clone(), l.to_owned())),
    }
}

proptest! {
    #[test]
    fn annotations_persist_until_replaced_or_cleared(
        items in prop::collection::vec(0u32..100, 1..12),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut history = Vec::new();
        let recording = record(items, |rec| {
            history = drive(rec, &ops)?;
            Ok(())
        })
        .unwrap();
        let timeline = recording.timeline();

        // One entry per frame before Final.
        prop_assert_eq!(history.len(), timeline.last_index());
        for (position, expected) in history.iter().enumerate() {
            prop_assert_eq!(&observed(timeline, position), expected, "position {}", position);
        }

        // Final clears everything.
        prop_assert_eq!(observed(timeline, timeline.last_index()), Expected::default());
    }

    #[test]
    fn final_verdict_matches_the_buffer(
        items in prop::collection::vec(0u32..20, 0..12),
        swaps in prop::collection::vec((0usize..12, 0usize..12), 0..20),
    ) {
        let recording = record(items, |rec| {
            let n = rec.len();
            if n == 0 {
                return Ok(());
            }
            for &(i, j) in &swaps {
                rec.swap(i % n, j % n)?;
            }
            Ok(())
        })
        .unwrap();

        let sorted = recording.buffer().as_slice().windows(2).all(|w| w[0] <= w[1]);
        let last = recording.timeline().last_index();
        prop_assert_eq!(recording.timeline().get(last), Some(&Frame::Final { sorted }));
    }
}
