// Integration tests for the instrumented sorting algorithms

use proptest::prelude::*;
use sortty::algorithms::Algorithm;
use sortty::step::{StepEvent, Value, VisualState};

fn fixtures() -> Vec<Vec<Value>> {
    vec![
        vec![],
        vec![42],
        vec![7, 7, 7, 7],
        vec![4, 1, 3, 9, 2],
        vec![1, 2, 3, 4, 5, 6],
        vec![6, 5, 4, 3, 2, 1],
        vec![3, -1, 4, -1, 5, -9, 2, 6, -5, 3],
        vec![
            20, 6, 1, 18, 17, 8, 7, 28, 3, 19, 4, 9, 16, 29, 27, 26, 25, 24, 5, 23,
        ],
    ]
}

fn collect(algorithm: Algorithm, values: &mut Vec<Value>) -> Vec<StepEvent> {
    algorithm.run(values).collect()
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

/// Replay `events` against a reference buffer mutated only from what each
/// event says happened, checking every snapshot along the way.
fn check_against_reference(algorithm: Algorithm, input: &[Value], events: &[StepEvent], end: &[Value]) {
    let mut reference = input.to_vec();

    // Insertion sort: key being inserted and its current slot
    let mut held: Option<(usize, Value)> = None;
    // Merge: window start, saved window contents, next destination
    let mut window: Option<(usize, Vec<Value>, usize)> = None;
    // Merge/quick: write shown by the previous event, landing now
    let mut pending: Option<Box<dyn FnOnce(&mut Vec<Value>)>> = None;

    for (k, event) in events.iter().enumerate() {
        if let Some(write) = pending.take() {
            write(&mut reference);
        }
        let positions = event.highlighted_positions();
        let state = event.highlight_state();

        match algorithm {
            Algorithm::Selection | Algorithm::Bubble => {
                if state == Some(VisualState::Swap) {
                    let (a, b) = (positions[0], positions[positions.len() - 1]);
                    reference.swap(a, b);
                }
            }
            Algorithm::Insertion => match state {
                Some(VisualState::Compare) => {
                    if let Some((slot, key)) = held.take() {
                        reference[slot] = key;
                    }
                    held = Some((positions[0], reference[positions[0]]));
                }
                Some(VisualState::Swap) => {
                    let vacated = positions[0];
                    reference[vacated + 1] = reference[vacated];
                    if let Some((slot, _)) = held.as_mut() {
                        *slot = vacated;
                    }
                }
                _ => panic!("unexpected insertion event {:?}", event),
            },
            Algorithm::Merge => match state {
                None => {
                    let frame = event.clone().into_frame();
                    let l = frame
                        .states
                        .iter()
                        .position(|s| *s == VisualState::Range)
                        .unwrap();
                    let r = frame
                        .states
                        .iter()
                        .rposition(|s| *s == VisualState::Range)
                        .unwrap();
                    window = Some((l, reference[l..=r].to_vec(), l));
                }
                Some(VisualState::Placed) => {
                    let (l, saved, next) = window.as_mut().unwrap();
                    let dest = *next;
                    *next += 1;
                    assert!(positions.contains(&dest), "event {} misses destination", k);
                    let source = positions.iter().copied().find(|&p| p != dest).unwrap_or(dest);
                    let value = saved[source - *l];
                    pending = Some(Box::new(move |buf: &mut Vec<Value>| buf[dest] = value));
                }
                _ => panic!("unexpected merge event {:?}", event),
            },
            Algorithm::Quick => {
                if state == Some(VisualState::Swap) {
                    let (a, b) = (positions[0], positions[positions.len() - 1]);
                    pending = Some(Box::new(move |buf: &mut Vec<Value>| buf.swap(a, b)));
                }
            }
        }

        assert_eq!(
            event.values(),
            reference.as_slice(),
            "{} snapshot {} diverged from reference",
            algorithm,
            k
        );
    }

    if let Some(write) = pending.take() {
        write(&mut reference);
    }
    if let Some((slot, key)) = held.take() {
        reference[slot] = key;
    }
    assert_eq!(reference, end, "{} final buffer diverged from reference", algorithm);
}

#[test]
fn test_every_algorithm_sorts_every_fixture() {
    for algorithm in Algorithm::ALL {
        for input in fixtures() {
            let mut values = input.clone();
            collect(algorithm, &mut values);
            assert_eq!(
                values,
                sorted_copy(&input),
                "{} failed on {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_snapshots_match_reference() {
    for algorithm in Algorithm::ALL {
        for input in fixtures() {
            let mut values = input.clone();
            let events = collect(algorithm, &mut values);
            check_against_reference(algorithm, &input, &events, &values);
        }
    }
}

#[test]
fn test_empty_buffer_emits_nothing() {
    for algorithm in Algorithm::ALL {
        let mut values: Vec<Value> = Vec::new();
        assert!(collect(algorithm, &mut values).is_empty());
    }
}

#[test]
fn test_states_cover_every_position() {
    for algorithm in Algorithm::ALL {
        let input = vec![9, 4, 7, 1, 8, 2];
        let mut values = input.clone();
        for event in collect(algorithm, &mut values) {
            let frame = event.into_frame();
            assert_eq!(frame.values.len(), input.len());
            assert_eq!(frame.states.len(), input.len());
        }
    }
}

#[test]
fn test_bubble_trace_5_3_8_1() {
    let mut values = vec![5, 3, 8, 1];
    let events = collect(Algorithm::Bubble, &mut values);

    use VisualState::{Compare, Swap};
    let expected: Vec<(VisualState, Vec<usize>, Vec<Value>)> = vec![
        (Compare, vec![0], vec![5, 3, 8, 1]),
        (Swap, vec![0, 1], vec![3, 5, 8, 1]),
        (Compare, vec![1], vec![3, 5, 8, 1]),
        (Compare, vec![2], vec![3, 5, 8, 1]),
        (Swap, vec![2, 3], vec![3, 5, 1, 8]),
        (Compare, vec![0], vec![3, 5, 1, 8]),
        (Compare, vec![1], vec![3, 5, 1, 8]),
        (Swap, vec![1, 2], vec![3, 1, 5, 8]),
        (Compare, vec![0], vec![3, 1, 5, 8]),
        (Swap, vec![0, 1], vec![1, 3, 5, 8]),
    ];

    let actual: Vec<(VisualState, Vec<usize>, Vec<Value>)> = events
        .iter()
        .map(|e| {
            (
                e.highlight_state().unwrap(),
                e.highlighted_positions(),
                e.values().to_vec(),
            )
        })
        .collect();

    assert_eq!(actual, expected);
    assert_eq!(values, vec![1, 3, 5, 8]);
}

#[test]
fn test_merge_takes_left_head_on_tie() {
    let mut values = vec![2, 1, 2];
    let events = collect(Algorithm::Merge, &mut values);

    // [2,1] window: range, place 1 (from 1 to 0), place 2 (from 0 to 1)
    // [1,2,2] window: range, place 1, tie between left 2 (offset 1) and right
    // 2 (offset 2) resolved left, then the right 2
    assert_eq!(events.len(), 7);
    assert_eq!(events[3].highlight_state(), None);
    assert_eq!(events[3].values(), &[1, 2, 2]);
    assert_eq!(events[4].highlighted_positions(), vec![0]);
    // The tie: source is the left half's offset 1, destination 1
    assert_eq!(events[5].highlighted_positions(), vec![1]);
    // Right half's 2 comes last, from offset 2 into slot 2
    assert_eq!(events[6].highlighted_positions(), vec![2]);
    assert_eq!(values, vec![1, 2, 2]);
}

#[test]
fn test_merge_sources_use_original_offsets() {
    let mut values = vec![3, 4, 1, 2];
    let events = collect(Algorithm::Merge, &mut values);

    // Final window [0, 3] splits into [3, 4] and [1, 2]; the right half's
    // first element lives at offset 2 and lands in slot 0
    let last_window = events
        .iter()
        .rposition(|e| e.highlight_state().is_none())
        .unwrap();
    assert_eq!(events[last_window].values(), &[3, 4, 1, 2]);
    assert_eq!(events[last_window + 1].highlighted_positions(), vec![0, 2]);
    assert_eq!(events[last_window + 2].highlighted_positions(), vec![1, 3]);
}

#[test]
fn test_insertion_counts_one_compare_per_element() {
    let mut values = vec![4, 3, 2, 1];
    let events = collect(Algorithm::Insertion, &mut values);

    let compares = events
        .iter()
        .filter(|e| e.highlight_state() == Some(VisualState::Compare))
        .count();
    let shifts = events
        .iter()
        .filter(|e| e.highlight_state() == Some(VisualState::Swap))
        .count();
    assert_eq!(compares, 3);
    // 1 + 2 + 3 shifts for a reversed list
    assert_eq!(shifts, 6);
}

#[test]
fn test_quick_partition_opens_with_band_and_pivot() {
    let mut values = vec![5, 2, 9, 4];
    let events = collect(Algorithm::Quick, &mut values);

    let entry = events[0].clone().into_frame();
    assert_eq!(
        entry.states,
        vec![
            VisualState::Range,
            VisualState::Range,
            VisualState::Range,
            VisualState::Pivot
        ]
    );
    // First scan step compares boundary 0 with j 0
    assert_eq!(events[1].highlight_state(), Some(VisualState::Compare));
    assert_eq!(events[1].highlighted_positions(), vec![0]);
}

#[test]
fn test_quick_sorts_left_range_before_right() {
    let mut values = vec![3, 7, 1, 8, 2, 9, 5];
    let events = collect(Algorithm::Quick, &mut values);

    // Partition-entry frames are the only quick frames without a highlight
    let windows: Vec<(Vec<usize>, usize)> = events
        .iter()
        .filter(|e| e.highlight_state().is_none())
        .map(|e| {
            let frame = e.clone().into_frame();
            let band = frame
                .states
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == VisualState::Range)
                .map(|(i, _)| i)
                .collect();
            let pivot = frame
                .states
                .iter()
                .position(|s| *s == VisualState::Pivot)
                .unwrap();
            (band, pivot)
        })
        .collect();

    // 5 lands at index 3, leaving [3, 1, 2] on the left and [7, 9, 8] on the
    // right; both sides need their own partition
    assert_eq!(
        windows,
        vec![
            (vec![0, 1, 2, 3, 4, 5], 6),
            (vec![0, 1], 2),
            (vec![4, 5], 6),
        ]
    );
    assert_eq!(values, vec![1, 2, 3, 5, 7, 8, 9]);
}

#[test]
fn test_runs_are_deterministic() {
    for algorithm in Algorithm::ALL {
        let mut a = vec![8, 3, 5, 3, 1];
        let mut b = a.clone();
        assert_eq!(collect(algorithm, &mut a), collect(algorithm, &mut b));
    }
}

proptest! {
    #[test]
    fn prop_sorts_and_preserves_multiset(
        input in prop::collection::vec(-50i64..50, 0..40),
        index in 0usize..5,
    ) {
        let algorithm = Algorithm::ALL[index];
        let mut values = input.clone();
        let events = collect(algorithm, &mut values);

        prop_assert_eq!(&values, &sorted_copy(&input));
        check_against_reference(algorithm, &input, &events, &values);
    }
}
