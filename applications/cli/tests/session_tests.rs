//! Console session driven end to end through the simulated engine

use cast_cli::commands::ConsoleCommand;
use cast_cli::session::{Console, Flow};
use cast_cli::simulator::SimulatedEngine;
use cast_core::Episode;
use cast_playback::{EngineNotification, PlayerConfig, PlayerController};
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

fn episode(n: u32, duration: u64) -> Episode {
    Episode::new(
        format!("Episode {n}"),
        "Host",
        format!("https://cdn.example.com/{n}.jpg"),
        duration,
        format!("https://cdn.example.com/{n}.mp3"),
    )
}

fn console(catalog: Vec<Episode>) -> (Console, UnboundedReceiver<EngineNotification>) {
    console_with(catalog, PlayerConfig::default())
}

fn console_with(
    catalog: Vec<Episode>,
    config: PlayerConfig,
) -> (Console, UnboundedReceiver<EngineNotification>) {
    let (tx, rx) = unbounded_channel();
    let engine = SimulatedEngine::new(&catalog, tx, 1.0);
    let player = PlayerController::new(engine, config);
    (Console::new(catalog, player), rx)
}

/// Feed every queued engine notification back into the controller
fn pump(console: &mut Console, rx: &mut UnboundedReceiver<EngineNotification>) {
    while let Ok(notification) = rx.try_recv() {
        console.player_mut().handle_notification(notification);
    }
}

fn tick(console: &mut Console, rx: &mut UnboundedReceiver<EngineNotification>, secs: u64) {
    console
        .player_mut()
        .engine_mut()
        .tick(Duration::from_secs(secs));
    pump(console, rx);
}

#[test]
fn plays_through_catalog_and_stops() {
    let (mut console, mut rx) = console(vec![episode(1, 3), episode(2, 3)]);

    let (flow, output) = console.apply(ConsoleCommand::Play(0));
    assert_eq!(flow, Flow::Continue);
    assert!(output.is_empty());
    pump(&mut console, &mut rx);
    assert_eq!(
        console.player().engine().source(),
        Some("https://cdn.example.com/1.mp3")
    );

    // Metadata, then two seconds of audio
    tick(&mut console, &mut rx, 1);
    tick(&mut console, &mut rx, 2);
    assert_eq!(console.player().elapsed(), 2);

    // End of the first episode moves on
    tick(&mut console, &mut rx, 2);
    assert_eq!(console.player().current_index(), 1);
    assert!(console.player().is_playing());
    assert_eq!(
        console.player().engine().source(),
        Some("https://cdn.example.com/2.mp3")
    );

    tick(&mut console, &mut rx, 1);
    assert_eq!(console.player().elapsed(), 0);

    // End of the queue clears it; the engine stopped on its own
    tick(&mut console, &mut rx, 4);
    assert!(console.player().episodes().is_empty());
    assert_eq!(console.player().current_index(), 0);
    assert!(!console.player().is_playing());
    assert!(console.player().engine().source().is_none());
}

#[test]
fn shuffled_single_episode_stops_with_the_transport() {
    let config = PlayerConfig {
        shuffling: true,
        ..PlayerConfig::default()
    };
    let (mut console, mut rx) = console_with(vec![episode(1, 3)], config);

    console.apply(ConsoleCommand::Play(0));
    pump(&mut console, &mut rx);
    tick(&mut console, &mut rx, 1);
    tick(&mut console, &mut rx, 4);

    assert_eq!(console.player().current_index(), 0);
    assert_eq!(console.player().episodes().len(), 1);
    assert!(!console.player().engine().is_playing());
    assert!(!console.player().is_playing());
    assert_eq!(console.player().elapsed(), 3);
}

#[test]
fn user_choice_survives_end_of_previous_episode() {
    let (mut console, mut rx) = console(vec![episode(1, 3), episode(2, 3), episode(3, 3)]);
    console.apply(ConsoleCommand::Play(0));
    tick(&mut console, &mut rx, 1);

    // The first episode ends but its notifications are still queued
    console
        .player_mut()
        .engine_mut()
        .tick(Duration::from_secs(4));
    console.apply(ConsoleCommand::Play(1));
    pump(&mut console, &mut rx);

    assert_eq!(console.player().current_index(), 1);
    assert_eq!(
        console.player().engine().source(),
        Some("https://cdn.example.com/2.mp3")
    );
    assert!(console.player().is_playing());
    assert!(console.player().engine().is_playing());
}

#[test]
fn events_render_as_text() {
    let (mut console, mut rx) = console(vec![episode(1, 60)]);

    console.apply(ConsoleCommand::Play(0));
    pump(&mut console, &mut rx);

    assert_eq!(
        console.drain_events(),
        vec![
            "Now playing: Episode 1 - Host [00:01:00]".to_string(),
            "Playing".to_string(),
        ]
    );
    assert!(console.drain_events().is_empty());
}

#[test]
fn pause_reaches_engine_and_comes_back() {
    let (mut console, mut rx) = console(vec![episode(1, 60)]);
    console.apply(ConsoleCommand::Play(0));
    pump(&mut console, &mut rx);

    console.apply(ConsoleCommand::Toggle);
    pump(&mut console, &mut rx);

    assert!(!console.player().is_playing());
    assert!(!console.player().engine().is_playing());

    // Paused transport does not advance
    tick(&mut console, &mut rx, 1);
    tick(&mut console, &mut rx, 5);
    assert_eq!(console.player().elapsed(), 0);
}

#[test]
fn disabled_controls_are_refused() {
    let (mut console, _rx) = console(vec![episode(1, 60)]);

    for command in [
        ConsoleCommand::Next,
        ConsoleCommand::Previous,
        ConsoleCommand::Toggle,
        ConsoleCommand::Loop,
        ConsoleCommand::Shuffle,
        ConsoleCommand::Seek(5),
    ] {
        let (_, output) = console.apply(command);
        assert_eq!(output, vec!["Not available right now".to_string()]);
    }

    // Shuffle stays off for a single-episode queue
    console.apply(ConsoleCommand::Single(0));
    let (_, output) = console.apply(ConsoleCommand::Shuffle);
    assert_eq!(output.len(), 1);
    assert!(!console.player().is_shuffling());
}

#[test]
fn seek_is_clamped_to_episode_length() {
    let (mut console, mut rx) = console(vec![episode(1, 30)]);
    console.apply(ConsoleCommand::Play(0));
    tick(&mut console, &mut rx, 1);

    console.apply(ConsoleCommand::Seek(999));

    assert_eq!(console.player().elapsed(), 30);
    assert_eq!(console.player().engine().position(), 30.0);
}

#[test]
fn out_of_range_start_leaves_player_idle() {
    let (mut console, _rx) = console(vec![episode(1, 30)]);

    let (_, output) = console.apply(ConsoleCommand::Play(4));

    assert_eq!(output, vec!["Episode 4 is not in the catalog".to_string()]);
    assert!(console.player().current_episode().is_none());
    assert!(console.player().engine().source().is_none());
}

#[test]
fn quit_stops_the_session() {
    let (mut console, _rx) = console(Vec::new());
    assert_eq!(console.apply(ConsoleCommand::Quit).0, Flow::Quit);
}
