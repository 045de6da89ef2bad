//! Sortreel headless playback: record a sort, then scrub it in a terminal.
//!
//! Demonstrates:
//!   1. Recording a selection sort through the instrumentation API
//!   2. Auto-playing the timeline with a simulated host loop
//!   3. Seeking backward and forward without re-running the algorithm
//!   4. The failed-verdict diagnostic on a deliberately broken sort
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example headless_playback

use std::time::Duration;

use sortreel::prelude::*;
use sortreel_test_utils::{scrambled, EarlyExitSort, SelectionSort};
use tracing_subscriber::EnvFilter;

// ---- Playback parameters ----------------------------------------------

const ITEMS: u32 = 8;
const SEED: u32 = 5;
const HOST_TICK: Duration = Duration::from_millis(16);
const FRAME_DELAY: Duration = Duration::from_millis(48);

// ---- Rendering --------------------------------------------------------

fn glyph(tag: DisplayTag) -> char {
    match tag {
        DisplayTag::Plain => ' ',
        DisplayTag::InRange => '.',
        DisplayTag::MarkedValue => '*',
        DisplayTag::Compared => '?',
        DisplayTag::Swapped => '~',
        DisplayTag::Sorted => '+',
        DisplayTag::Unsorted => '!',
    }
}

fn render(player: &Player<u32>) -> String {
    let tags = player.display_tags();
    let row: Vec<String> = player
        .buffer()
        .iter()
        .zip(tags)
        .map(|(v, t)| format!("{}{v:>2}", glyph(t)))
        .collect();
    format!(
        "[{:>4}/{:<4}] {}  {}",
        player.position(),
        player.last_index(),
        row.join(" "),
        player.describe_current().unwrap_or_default(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Record.
    let recording = record_algorithm(scrambled(ITEMS, SEED), &SelectionSort)?;
    let stats = recording.timeline().stats();
    println!(
        "Recorded {} frames ({} compares, {} swaps, {} marks).",
        recording.timeline().len(),
        stats.compares,
        stats.swaps,
        stats.marks,
    );

    // 2. Auto-play from the start with a 16 ms host loop.
    let config = PlaybackConfig {
        frame_delay: FRAME_DELAY,
        start_playing: true,
        ..PlaybackConfig::default()
    };
    let mut player = Player::new(recording, config)?;
    println!("{}", render(&player));
    while player.is_playing() {
        if player.advance(HOST_TICK) > 0 {
            println!("{}", render(&player));
        }
    }

    // 3. Scrub backward to the middle, then step through a few frames.
    let mid = player.last_index() / 2;
    player.set_position(mid);
    println!("\nJumped back to frame {mid}:");
    for _ in 0..4 {
        println!("{}", render(&player));
        player.step_forward();
    }
    let metrics = player.metrics();
    println!(
        "\nSeeks: {}, frames applied: {}, frames undone: {}",
        metrics.seeks, metrics.frames_applied, metrics.frames_undone,
    );

    // 4. A sort that quits early leaves a failed verdict on the final frame.
    let broken = record_algorithm(scrambled(ITEMS, SEED), &EarlyExitSort { passes: 2 })?;
    let broken_player = Player::new(broken, PlaybackConfig::default())?;
    println!("\n{}", render(&broken_player));

    Ok(())
}
