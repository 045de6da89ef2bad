//! Integration test: incremental replay against fresh re-simulation.
//!
//! Verifies that the buffer the player holds at any position equals the
//! buffer obtained by applying the timeline's swaps from the initial
//! items up to that position, that seeks cost exactly the distance
//! travelled, and that auto-advance plays a real recording to the end.

use std::time::Duration;

use proptest::prelude::*;
use sortreel_core::{DisplayTag, Frame};
use sortreel_playback::{PlaybackConfig, PlaybackMode, Player};
use sortreel_record::{record, record_algorithm, Timeline};
use sortreel_test_utils::{reversed, scrambled, BubbleSort, EarlyExitSort, SelectionSort};

fn paused(recording: sortreel_record::Recording<u32>) -> Player<u32> {
    Player::new(recording, PlaybackConfig::default()).unwrap()
}

/// Buffer at `position`, computed from scratch.
fn resimulate(initial: &[u32], timeline: &Timeline<u32>, position: usize) -> Vec<u32> {
    let mut items = initial.to_vec();
    for frame in &timeline.as_slice()[..=position] {
        if let Frame::Swap { left, right } = *frame {
            items.swap(left, right);
        }
    }
    items
}

// ── Seek cost ────────────────────────────────────────────────────────

#[test]
fn seek_back_across_two_swaps() {
    // 0 Initial, 1 Compare, 2 Swap(0,1), 3 Compare, 4 Swap(1,2), 5 Final
    let recording = record(vec![5, 3, 8], |rec| {
        rec.compare(0, 1)?;
        rec.swap(0, 1)?;
        rec.compare(1, 2)?;
        rec.swap(1, 2)?;
        Ok(())
    })
    .unwrap();
    let mut player = paused(recording);
    player.set_position(4);
    assert_eq!(player.buffer().as_slice(), &[3, 8, 5]);
    let undone_before = player.metrics().frames_undone;

    assert!(player.set_position(1));
    assert_eq!(player.position(), 1);
    assert_eq!(player.buffer().as_slice(), &[5, 3, 8]);
    assert_eq!(player.metrics().frames_undone - undone_before, 3);
}

#[test]
fn short_hop_cost_is_independent_of_timeline_length() {
    let mut player = paused(record_algorithm(reversed(64), &BubbleSort).unwrap());
    let mid = player.last_index() / 2;
    player.set_position(mid);
    let applied = player.metrics().frames_applied;
    let undone = player.metrics().frames_undone;

    player.set_position(mid + 7);
    player.set_position(mid + 2);
    assert_eq!(player.metrics().frames_applied - applied, 7);
    assert_eq!(player.metrics().frames_undone - undone, 5);
}

// ── Equivalence with re-simulation ───────────────────────────────────

#[test]
fn every_position_matches_resimulation() {
    let items = scrambled(10, 7);
    let recording = record_algorithm(items.clone(), &SelectionSort).unwrap();
    let mut player = paused(recording);

    player.seek_start();
    loop {
        let expected = resimulate(&items, player.timeline(), player.position());
        assert_eq!(player.buffer().as_slice(), expected.as_slice(), "position {}", player.position());
        if !player.step_forward() {
            break;
        }
    }
    while player.step_backward() {
        let expected = resimulate(&items, player.timeline(), player.position());
        assert_eq!(player.buffer().as_slice(), expected.as_slice(), "position {}", player.position());
    }
    assert_eq!(player.position(), 0);
    assert_eq!(player.buffer().as_slice(), items.as_slice());
}

proptest! {
    #[test]
    fn random_seeks_match_resimulation(
        items in prop::collection::vec(0u32..50, 1..10),
        swaps in prop::collection::vec((0usize..10, 0usize..10), 0..30),
        targets in prop::collection::vec(0usize..64, 1..20),
    ) {
        let recording = record(items.clone(), |rec| {
            let n = rec.len();
            for &(i, j) in &swaps {
                rec.compare(i % n, j % n)?;
                rec.swap(i % n, j % n)?;
            }
            Ok(())
        })
        .unwrap();
        let mut player = paused(recording);

        for target in targets {
            let target = target % player.frame_count();
            player.set_position(target);
            prop_assert_eq!(player.position(), target);
            let expected = resimulate(&items, player.timeline(), target);
            prop_assert_eq!(player.buffer().as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn there_and_back_restores_the_buffer(
        items in prop::collection::vec(0u32..50, 2..10),
        swaps in prop::collection::vec((0usize..10, 0usize..10), 1..30),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let recording = record(items, |rec| {
            let n = rec.len();
            for &(i, j) in &swaps {
                rec.swap(i % n, j % n)?;
            }
            Ok(())
        })
        .unwrap();
        let mut player = paused(recording);
        let a = a % player.frame_count();
        let b = b % player.frame_count();

        player.set_position(a);
        let at_a = player.buffer().clone();
        player.set_position(b);
        player.set_position(a);
        prop_assert_eq!(player.buffer(), &at_a);
    }
}

// ── Auto-advance ─────────────────────────────────────────────────────

#[test]
fn auto_play_reaches_the_end_and_pauses() {
    let recording = record_algorithm(scrambled(8, 2), &BubbleSort).unwrap();
    let frames = recording.timeline().len();
    let config = PlaybackConfig {
        frame_delay: Duration::from_millis(30),
        start_playing: true,
        ..PlaybackConfig::default()
    };
    let mut player = Player::new(recording, config).unwrap();
    assert_eq!(player.position(), 0);
    assert_eq!(player.mode(), PlaybackMode::Playing);

    let mut ticks = 0;
    let mut steps = 0;
    while player.is_playing() {
        steps += player.advance(Duration::from_millis(10));
        ticks += 1;
        assert!(ticks < frames * 10, "playback never finished");
    }

    assert!(player.is_at_end());
    assert_eq!(player.mode(), PlaybackMode::Paused);
    assert_eq!(steps as usize, frames - 1);
    assert_eq!(player.metrics().auto_steps, (frames - 1) as u64);
    assert!(player.buffer().as_slice().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn failed_verdict_tags_every_index() {
    let recording = record_algorithm(reversed(6), &EarlyExitSort { passes: 1 }).unwrap();
    let player = paused(recording);

    assert!(player.is_at_end());
    assert!(player.display_tags().iter().all(|&t| t == DisplayTag::Unsorted));
    assert_eq!(
        player.describe_current().as_deref(),
        Some("The array is NOT sorted: the algorithm left items out of order."),
    );
}

#[test]
fn into_parts_returns_final_state_from_any_position() {
    let items = scrambled(9, 1);
    let mut expected = items.clone();
    expected.sort_unstable();

    let mut player = paused(record_algorithm(items, &SelectionSort).unwrap());
    player.set_position(player.last_index() / 3);
    let (timeline, buffer) = player.into_parts();

    assert_eq!(timeline.verdict(), Some(true));
    assert_eq!(buffer.into_vec(), expected);
}
