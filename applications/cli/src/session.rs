//! Interactive playback session
//!
//! The console is the presentation layer: it turns typed commands into
//! controller commands (only when the matching control would be enabled),
//! and renders controller events as text.

use crate::commands::{ConsoleCommand, HELP};
use crate::config::CliConfig;
use crate::error::Result;
use crate::format::format_duration;
use crate::simulator::SimulatedEngine;
use cast_core::Episode;
use cast_playback::{PlayerController, PlayerEvent, PlayerSnapshot};
use crossbeam_channel::Receiver;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::unbounded_channel;

/// Whether the session should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Catalog plus the controller it feeds
pub struct Console {
    catalog: Vec<Episode>,
    player: PlayerController<SimulatedEngine>,
    events: Receiver<PlayerEvent>,
}

impl Console {
    pub fn new(catalog: Vec<Episode>, mut player: PlayerController<SimulatedEngine>) -> Self {
        let events = player.subscribe();
        Self {
            catalog,
            player,
            events,
        }
    }

    pub fn player(&self) -> &PlayerController<SimulatedEngine> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController<SimulatedEngine> {
        &mut self.player
    }

    /// Apply a console command, returning lines to show the user
    pub fn apply(&mut self, command: ConsoleCommand) -> (Flow, Vec<String>) {
        let controls = self.player.controls();
        let mut output = Vec::new();

        match command {
            ConsoleCommand::Play(index) => {
                if index >= self.catalog.len() {
                    output.push(format!("Episode {index} is not in the catalog"));
                }
                self.player.play_list(self.catalog.clone(), index);
            }
            ConsoleCommand::Single(index) => match self.catalog.get(index) {
                Some(episode) => self.player.play(episode.clone()),
                None => output.push(format!("Episode {index} is not in the catalog")),
            },
            ConsoleCommand::Next if controls.next => self.player.play_next(),
            ConsoleCommand::Previous if controls.previous => self.player.play_previous(),
            ConsoleCommand::Toggle if controls.play_pause => self.player.toggle_play(),
            ConsoleCommand::Loop if controls.looping => self.player.toggle_loop(),
            ConsoleCommand::Shuffle if controls.shuffle => self.player.toggle_shuffle(),
            ConsoleCommand::Seek(seconds) if controls.seek => {
                self.player.handle_seek(seconds.min(controls.seek_max));
            }
            ConsoleCommand::Next
            | ConsoleCommand::Previous
            | ConsoleCommand::Toggle
            | ConsoleCommand::Loop
            | ConsoleCommand::Shuffle
            | ConsoleCommand::Seek(_) => output.push("Not available right now".to_string()),
            ConsoleCommand::Clear => self.player.clear_player_state(),
            ConsoleCommand::Status => output.push(status_line(&self.player.snapshot())),
            ConsoleCommand::List => output.extend(catalog_lines(&self.catalog)),
            ConsoleCommand::Help => output.push(HELP.to_string()),
            ConsoleCommand::Quit => return (Flow::Quit, output),
        }

        (Flow::Continue, output)
    }

    /// Render pending controller events
    pub fn drain_events(&self) -> Vec<String> {
        self.events
            .try_iter()
            .filter_map(|event| describe_event(&event))
            .collect()
    }
}

/// One line per catalog episode
pub fn catalog_lines(catalog: &[Episode]) -> Vec<String> {
    if catalog.is_empty() {
        return vec!["Catalog is empty".to_string()];
    }

    catalog
        .iter()
        .enumerate()
        .map(|(index, episode)| {
            format!(
                "{index:>3}  {}  {}  ({})",
                format_duration(episode.duration),
                episode.title,
                episode.members
            )
        })
        .collect()
}

/// Text for an event, or `None` for events not worth a line
pub fn describe_event(event: &PlayerEvent) -> Option<String> {
    match event {
        PlayerEvent::SelectionChanged {
            episode: Some(episode),
            ..
        } => Some(format!(
            "Now playing: {} - {} [{}]",
            episode.title,
            episode.members,
            format_duration(episode.duration)
        )),
        PlayerEvent::SelectionChanged { episode: None, .. } => {
            Some("Select an episode to listen to".to_string())
        }
        PlayerEvent::PlayingChanged(playing) => {
            Some(if *playing { "Playing" } else { "Paused" }.to_string())
        }
        PlayerEvent::LoopingChanged(looping) => Some(format!("Loop {}", on_off(*looping))),
        PlayerEvent::ShufflingChanged(shuffling) => {
            Some(format!("Shuffle {}", on_off(*shuffling)))
        }
        PlayerEvent::Cleared => Some("Queue finished".to_string()),
        PlayerEvent::QueueReplaced { .. } | PlayerEvent::ProgressChanged { .. } => None,
    }
}

/// Status line for the current state
pub fn status_line(snapshot: &PlayerSnapshot) -> String {
    let Some(episode) = &snapshot.current_episode else {
        return "Nothing playing".to_string();
    };

    let mut flags = Vec::new();
    if snapshot.looping {
        flags.push("loop");
    }
    if snapshot.shuffling {
        flags.push("shuffle");
    }

    format!(
        "{} {}  {} / {}  [{}/{}]{}",
        if snapshot.playing { ">" } else { "||" },
        episode.title,
        format_duration(snapshot.elapsed),
        format_duration(episode.duration),
        snapshot.current_index + 1,
        snapshot.episodes.len(),
        if flags.is_empty() {
            String::new()
        } else {
            format!("  ({})", flags.join(", "))
        }
    )
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Run an interactive session until `quit`, end of input or Ctrl-C
pub async fn run(config: CliConfig, catalog: Vec<Episode>, start: usize) -> Result<()> {
    let (notify_tx, mut notifications) = unbounded_channel();
    let engine = SimulatedEngine::new(&catalog, notify_tx, config.simulator.speed);
    let player = PlayerController::new(engine, config.player.clone());
    let mut console = Console::new(catalog, player);

    let tick = config.simulator.tick();
    let mut ticker = tokio::time::interval(tick);
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    let (_, lines) = console.apply(ConsoleCommand::Play(start));
    print_lines(lines);
    print_lines(console.drain_events());

    loop {
        tokio::select! {
            line = stdin.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("End of input");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match line.parse::<ConsoleCommand>() {
                    Ok(command) => {
                        let (flow, lines) = console.apply(command);
                        print_lines(lines);
                        if flow == Flow::Quit {
                            break;
                        }
                    }
                    Err(e) => println!("{e} (type `help` for commands)"),
                }
            }
            _ = ticker.tick() => {
                console.player_mut().engine_mut().tick(tick);
            }
            Some(notification) = notifications.recv() => {
                tracing::trace!("Engine notification: {:?}", notification);
                console.player_mut().handle_notification(notification);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }

        print_lines(console.drain_events());
    }

    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
