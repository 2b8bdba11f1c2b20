//! Player controller - core orchestration
//!
//! Owns the queue, the mode flags and the progress tracker, resolves
//! navigation, and keeps the playback engine in line with that state.

use crate::{
    engine::{EngineIntent, EngineNotification, PlaybackEngine},
    error::Result,
    events::{EventBus, PlayerEvent},
    navigation,
    progress::Progress,
    queue::Queue,
    types::{ControlAvailability, PlaybackMode, PlayerConfig, PlayerSnapshot},
};
use cast_core::Episode;
use crossbeam_channel::Receiver;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Observable values captured before a mutation, diffed afterwards to
/// decide which events to emit
struct Observed {
    index: usize,
    episode: Option<Episode>,
    mode: PlaybackMode,
    elapsed: u64,
}

/// Playback state machine for a queue of episodes
///
/// All commands are infallible and take `&mut self`; the composing
/// application owns the controller and applies UI commands and engine
/// notifications one at a time, in arrival order.
pub struct PlayerController<E: PlaybackEngine> {
    queue: Queue,
    mode: PlaybackMode,
    progress: Progress,
    autoplay: bool,

    engine: E,
    // What the engine was last told; `commit` syncs it after every command,
    // so between commands it always matches the engine
    applied: EngineIntent,

    rng: StdRng,
    events: EventBus,
}

impl<E: PlaybackEngine> PlayerController<E> {
    /// Create a controller driving `engine`
    pub fn new(engine: E, config: PlayerConfig) -> Self {
        Self::with_rng(engine, config, StdRng::from_entropy())
    }

    /// Create a controller with a specific random source for shuffle
    pub fn with_rng(engine: E, config: PlayerConfig, rng: StdRng) -> Self {
        Self {
            queue: Queue::new(),
            mode: PlaybackMode {
                playing: false,
                looping: config.looping,
                shuffling: config.shuffling,
            },
            progress: Progress::new(),
            autoplay: config.autoplay,
            engine,
            applied: EngineIntent::default(),
            rng,
            events: EventBus::new(),
        }
    }

    // ===== Queue & Selection =====

    /// Play a single episode, replacing the queue
    pub fn play(&mut self, episode: Episode) {
        let before = self.observe();

        tracing::debug!("Playing single episode: {}", episode.title);
        self.queue.replace_with_one(episode);
        self.mode.playing = true;
        self.events.emit(PlayerEvent::QueueReplaced { length: 1 });

        self.commit(before);
    }

    /// Play `episodes` starting at `index`, replacing the queue
    ///
    /// `index` is not validated: past the end of the list there is simply
    /// no current episode.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) {
        let before = self.observe();

        let length = episodes.len();
        tracing::debug!("Playing list of {} episodes from index {}", length, index);
        if index >= length {
            tracing::debug!("Start index {} is past the end of the list", index);
        }
        self.queue.replace(episodes, index);
        self.mode.playing = true;
        self.events.emit(PlayerEvent::QueueReplaced { length });

        self.commit(before);
    }

    /// Empty the queue and reset the selection
    ///
    /// The playing flag is left as it is.
    pub fn clear_player_state(&mut self) {
        let before = self.observe();
        let had_queue = !self.queue.is_empty() || self.queue.current_index() != 0;

        self.queue.clear();
        if had_queue {
            tracing::debug!("Player state cleared");
            self.events.emit(PlayerEvent::Cleared);
        }

        self.commit(before);
    }

    // ===== Mode flags =====

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        let before = self.observe();
        self.mode.playing = !self.mode.playing;
        self.commit(before);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        let before = self.observe();
        self.mode.looping = !self.mode.looping;
        self.commit(before);
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        let before = self.observe();
        self.mode.shuffling = !self.mode.shuffling;
        self.commit(before);
    }

    /// Set the playing flag explicitly
    pub fn set_playing_state(&mut self, playing: bool) {
        let before = self.observe();
        self.mode.playing = playing;
        self.commit(before);
    }

    // ===== Navigation =====

    /// Move to the next episode, or a random one while shuffling
    ///
    /// No-op when there is no next episode.
    pub fn play_next(&mut self) {
        let Some(index) = navigation::next_index(
            self.queue.current_index(),
            self.queue.len(),
            self.mode.shuffling,
            &mut self.rng,
        ) else {
            return;
        };

        let before = self.observe();
        tracing::debug!("Next: {} -> {}", self.queue.current_index(), index);
        self.queue.select(index);
        self.commit(before);
    }

    /// Move to the previous episode
    ///
    /// No-op at the start of the queue.
    pub fn play_previous(&mut self) {
        let Some(index) = navigation::previous_index(self.queue.current_index()) else {
            return;
        };

        let before = self.observe();
        tracing::debug!("Previous: {} -> {}", self.queue.current_index(), index);
        self.queue.select(index);
        self.commit(before);
    }

    // ===== Progress =====

    /// Seek the current episode to `seconds`
    ///
    /// Elapsed time is updated immediately, without waiting for the engine.
    pub fn handle_seek(&mut self, seconds: u64) {
        let before = self.observe();

        if self.applied.source.is_some() {
            let result = self.engine.seek(seconds);
            log_engine_failure("seek", result);
        }
        self.progress.seek(seconds);

        self.commit(before);
    }

    // ===== Engine notifications =====

    /// Apply a notification reported by the engine
    pub fn handle_notification(&mut self, notification: EngineNotification) {
        match notification {
            EngineNotification::TimeUpdate(seconds) => {
                let before = self.observe();
                self.progress.time_update(seconds);
                self.commit(before);
            }
            // A source cannot end before its metadata loaded, so this is a
            // leftover from the source that was just replaced
            EngineNotification::Ended if !self.progress.is_tracking() => {
                tracing::debug!("Ignoring end of a superseded source");
            }
            EngineNotification::Ended => self.handle_ended(),
            EngineNotification::Playing => self.transport_reported(true),
            EngineNotification::Paused => self.transport_reported(false),
            EngineNotification::MetadataLoaded => {
                let before = self.observe();

                self.progress.start_tracking();
                if self.applied.source.is_some() {
                    let result = self.engine.seek(0);
                    log_engine_failure("seek", result);
                }

                self.commit(before);
            }
        }
    }

    fn handle_ended(&mut self) {
        if self.has_next() {
            self.play_next();
        } else {
            tracing::debug!("Reached end of queue");
            self.clear_player_state();
        }
    }

    /// The engine's actual transport state wins over whatever was requested
    fn transport_reported(&mut self, playing: bool) {
        let before = self.observe();

        self.mode.playing = playing;
        // The engine is already there; don't echo it back
        self.applied.playing = playing;

        self.commit(before);
    }

    // ===== State Queries =====

    pub fn episodes(&self) -> &[Episode] {
        self.queue.episodes()
    }

    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    /// Currently selected episode, absent for an empty queue or an
    /// out-of-range index
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode.playing
    }

    pub fn is_looping(&self) -> bool {
        self.mode.looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.mode.shuffling
    }

    pub fn has_next(&self) -> bool {
        navigation::has_next(
            self.queue.current_index(),
            self.queue.len(),
            self.mode.shuffling,
        )
    }

    pub fn has_previous(&self) -> bool {
        navigation::has_previous(self.queue.current_index())
    }

    /// Elapsed whole seconds in the current episode
    pub fn elapsed(&self) -> u64 {
        self.progress.elapsed()
    }

    /// Engine state derived from the current player state
    pub fn intent(&self) -> EngineIntent {
        EngineIntent {
            source: self.queue.current().map(|episode| episode.url.clone()),
            playing: self.mode.playing,
            looping: self.mode.looping,
        }
    }

    /// Which controls a presentation layer should enable
    pub fn controls(&self) -> ControlAvailability {
        let Some(episode) = self.queue.current() else {
            return ControlAvailability::default();
        };

        ControlAvailability {
            shuffle: self.queue.len() != 1,
            previous: self.has_previous(),
            play_pause: true,
            next: self.has_next(),
            looping: true,
            seek: true,
            seek_max: episode.duration,
        }
    }

    /// Owned copy of everything a presentation layer reads
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episodes: self.queue.episodes().to_vec(),
            current_index: self.queue.current_index(),
            current_episode: self.queue.current().cloned(),
            playing: self.mode.playing,
            looping: self.mode.looping,
            shuffling: self.mode.shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            elapsed: self.progress.elapsed(),
        }
    }

    /// Subscribe to change notifications
    pub fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine, e.g. to advance a simulated transport
    ///
    /// Commands issued directly through this reference bypass the
    /// controller's bookkeeping.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // ===== Internal =====

    fn observe(&self) -> Observed {
        Observed {
            index: self.queue.current_index(),
            episode: self.queue.current().cloned(),
            mode: self.mode,
            elapsed: self.progress.elapsed(),
        }
    }

    /// Push state to the engine, then emit an event for every value that
    /// differs from `before`
    fn commit(&mut self, before: Observed) {
        self.sync_engine();

        if before.index != self.queue.current_index()
            || before.episode.as_ref() != self.queue.current()
        {
            self.events.emit(PlayerEvent::SelectionChanged {
                index: self.queue.current_index(),
                episode: self.queue.current().cloned(),
            });
        }

        if before.mode.playing != self.mode.playing {
            self.events.emit(PlayerEvent::PlayingChanged(self.mode.playing));
        }
        if before.mode.looping != self.mode.looping {
            self.events.emit(PlayerEvent::LoopingChanged(self.mode.looping));
        }
        if before.mode.shuffling != self.mode.shuffling {
            self.events
                .emit(PlayerEvent::ShufflingChanged(self.mode.shuffling));
        }

        if before.elapsed != self.progress.elapsed() {
            self.events.emit(PlayerEvent::ProgressChanged {
                elapsed: self.progress.elapsed(),
            });
        }
    }

    /// Send the engine only what changed since the last sync
    fn sync_engine(&mut self) {
        let desired = self.intent();
        if desired == self.applied {
            return;
        }

        if desired.source != self.applied.source {
            self.progress.stop_tracking();

            match &desired.source {
                Some(url) => {
                    tracing::debug!("Loading source {}", url);
                    log_engine_failure("load", self.engine.load(url));
                    log_engine_failure("set_loop", self.engine.set_loop(desired.looping));

                    if desired.playing || self.autoplay {
                        log_engine_failure("play", self.engine.play());
                    } else {
                        log_engine_failure("pause", self.engine.pause());
                    }
                }
                None => {
                    tracing::debug!("No current episode, unloading source");
                    log_engine_failure("unload", self.engine.unload());
                }
            }
        } else if desired.source.is_some() {
            if desired.playing != self.applied.playing {
                let result = if desired.playing {
                    self.engine.play()
                } else {
                    self.engine.pause()
                };
                log_engine_failure(if desired.playing { "play" } else { "pause" }, result);
            }

            if desired.looping != self.applied.looping {
                log_engine_failure("set_loop", self.engine.set_loop(desired.looping));
            }
        }

        self.applied = desired;
    }
}

/// Engine failures belong to the engine; the controller only records them
fn log_engine_failure(command: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!("Engine {} failed: {}", command, e);
    }
}
