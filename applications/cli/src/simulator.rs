//! Simulated playback engine
//!
//! Stands in for a real audio transport: it "plays" catalog episodes by
//! advancing a clock on every tick and reports back through the same
//! notifications a real engine would send.

use cast_core::Episode;
use cast_playback::{EngineError, EngineNotification, PlaybackEngine, Result};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Clock-driven stand-in for an audio transport
pub struct SimulatedEngine {
    /// Known sources and their length in seconds
    durations: HashMap<String, u64>,
    notifications: UnboundedSender<EngineNotification>,
    speed: f64,

    source: Option<String>,
    position: f64,
    playing: bool,
    looping: bool,
    metadata_pending: bool,
}

impl SimulatedEngine {
    /// Create an engine that can play the given episodes
    pub fn new(
        episodes: &[Episode],
        notifications: UnboundedSender<EngineNotification>,
        speed: f64,
    ) -> Self {
        Self {
            durations: episodes
                .iter()
                .map(|episode| (episode.url.clone(), episode.duration))
                .collect(),
            notifications,
            speed,
            source: None,
            position: 0.0,
            playing: false,
            looping: false,
            metadata_pending: false,
        }
    }

    /// Advance the simulated transport by `elapsed` wall-clock time
    pub fn tick(&mut self, elapsed: Duration) {
        let Some(duration) = self.source.as_ref().and_then(|url| self.durations.get(url)) else {
            return;
        };
        let duration = *duration as f64;

        // Metadata arrives on the first tick after a load
        if self.metadata_pending {
            self.metadata_pending = false;
            self.notify(EngineNotification::MetadataLoaded);
            return;
        }

        if !self.playing {
            return;
        }

        self.position += elapsed.as_secs_f64() * self.speed;

        if self.position < duration {
            self.notify(EngineNotification::TimeUpdate(self.position));
        } else if self.looping && duration > 0.0 {
            self.position %= duration;
            self.notify(EngineNotification::TimeUpdate(self.position));
        } else {
            // The transport stops before it reports the end
            self.position = duration;
            self.playing = false;
            self.notify(EngineNotification::TimeUpdate(self.position));
            self.notify(EngineNotification::Paused);
            self.notify(EngineNotification::Ended);
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    fn notify(&self, notification: EngineNotification) {
        // Nobody listening means the session is shutting down
        let _ = self.notifications.send(notification);
    }
}

impl PlaybackEngine for SimulatedEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.source = None;
        self.position = 0.0;
        self.playing = false;
        self.metadata_pending = false;

        if !self.durations.contains_key(url) {
            return Err(EngineError::Load {
                url: url.to_string(),
                reason: "not in catalog".to_string(),
            });
        }

        tracing::debug!("Simulator loaded {}", url);
        self.source = Some(url.to_string());
        self.metadata_pending = true;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(EngineError::Transport("nothing loaded".to_string()));
        }

        if !self.playing {
            self.playing = true;
            self.notify(EngineNotification::Playing);
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if self.playing {
            self.playing = false;
            self.notify(EngineNotification::Paused);
        }
        Ok(())
    }

    fn set_loop(&mut self, enabled: bool) -> Result<()> {
        self.looping = enabled;
        Ok(())
    }

    fn seek(&mut self, seconds: u64) -> Result<()> {
        let Some(duration) = self.source.as_ref().and_then(|url| self.durations.get(url)) else {
            return Err(EngineError::Seek(seconds));
        };

        if seconds > *duration {
            return Err(EngineError::Seek(seconds));
        }

        self.position = seconds as f64;
        Ok(())
    }

    /// Dropping the source is silent, like removing an audio element
    fn unload(&mut self) -> Result<()> {
        self.source = None;
        self.position = 0.0;
        self.playing = false;
        self.metadata_pending = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn engine() -> (SimulatedEngine, UnboundedReceiver<EngineNotification>) {
        let (tx, rx) = unbounded_channel();
        let episodes = vec![Episode::new("Short", "Host", "https://x/s.jpg", 3, "https://x/s.mp3")];
        (SimulatedEngine::new(&episodes, tx, 1.0), rx)
    }

    fn drain(rx: &mut UnboundedReceiver<EngineNotification>) -> Vec<EngineNotification> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn unknown_source_fails_to_load() {
        let (mut engine, _rx) = engine();
        assert!(matches!(
            engine.load("https://x/missing.mp3"),
            Err(EngineError::Load { .. })
        ));
        assert!(engine.source().is_none());
        assert!(engine.play().is_err());
    }

    #[test]
    fn metadata_arrives_on_first_tick() {
        let (mut engine, mut rx) = engine();
        engine.load("https://x/s.mp3").unwrap();
        assert!(drain(&mut rx).is_empty());

        engine.tick(Duration::from_secs(1));
        assert_eq!(drain(&mut rx), vec![EngineNotification::MetadataLoaded]);
    }

    #[test]
    fn reports_only_real_transitions() {
        let (mut engine, mut rx) = engine();
        engine.load("https://x/s.mp3").unwrap();

        engine.play().unwrap();
        engine.play().unwrap();
        engine.pause().unwrap();
        engine.pause().unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![EngineNotification::Playing, EngineNotification::Paused]
        );
    }

    #[test]
    fn plays_to_the_end() {
        let (mut engine, mut rx) = engine();
        engine.load("https://x/s.mp3").unwrap();
        engine.play().unwrap();
        engine.tick(Duration::from_secs(1));
        drain(&mut rx);

        engine.tick(Duration::from_secs(2));
        assert_eq!(drain(&mut rx), vec![EngineNotification::TimeUpdate(2.0)]);

        engine.tick(Duration::from_secs(2));
        assert_eq!(
            drain(&mut rx),
            vec![
                EngineNotification::TimeUpdate(3.0),
                EngineNotification::Paused,
                EngineNotification::Ended,
            ]
        );
        assert!(!engine.is_playing());
    }

    #[test]
    fn looping_wraps_instead_of_ending() {
        let (mut engine, mut rx) = engine();
        engine.load("https://x/s.mp3").unwrap();
        engine.set_loop(true).unwrap();
        engine.play().unwrap();
        engine.tick(Duration::from_secs(1));
        drain(&mut rx);

        engine.tick(Duration::from_secs(4));

        assert_eq!(drain(&mut rx), vec![EngineNotification::TimeUpdate(1.0)]);
        assert!(engine.is_playing());
    }

    #[test]
    fn seek_is_bounded_by_duration() {
        let (mut engine, _rx) = engine();
        assert!(engine.seek(1).is_err());

        engine.load("https://x/s.mp3").unwrap();
        engine.seek(2).unwrap();
        assert_eq!(engine.position(), 2.0);
        assert!(matches!(engine.seek(10), Err(EngineError::Seek(10))));
    }

    #[test]
    fn unload_is_silent() {
        let (mut engine, mut rx) = engine();
        engine.load("https://x/s.mp3").unwrap();
        engine.play().unwrap();
        drain(&mut rx);

        engine.unload().unwrap();

        assert!(drain(&mut rx).is_empty());
        assert!(engine.source().is_none());
        assert!(!engine.is_playing());
    }
}
