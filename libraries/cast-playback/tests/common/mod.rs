/// Common test utilities and fixtures
use cast_core::Episode;
use cast_playback::{PlaybackEngine, PlayerConfig, PlayerController, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A command received by the recording engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Load(String),
    Play,
    Pause,
    SetLoop(bool),
    Seek(u64),
    Unload,
}

/// Engine that records every command it receives
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<Call>,
}

impl RecordingEngine {
    /// Return and forget the calls recorded so far
    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl PlaybackEngine for RecordingEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.calls.push(Call::Load(url.to_string()));
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push(Call::Play);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.push(Call::Pause);
        Ok(())
    }

    fn set_loop(&mut self, enabled: bool) -> Result<()> {
        self.calls.push(Call::SetLoop(enabled));
        Ok(())
    }

    fn seek(&mut self, seconds: u64) -> Result<()> {
        self.calls.push(Call::Seek(seconds));
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.calls.push(Call::Unload);
        Ok(())
    }
}

pub fn episode(n: u32) -> Episode {
    Episode::new(
        format!("Episode {n}"),
        format!("Host {n}"),
        format!("https://cdn.example.com/{n}.jpg"),
        1200,
        url(n),
    )
}

pub fn url(n: u32) -> String {
    format!("https://cdn.example.com/{n}.mp3")
}

pub fn player() -> PlayerController<RecordingEngine> {
    player_with(PlayerConfig::default())
}

pub fn player_with(config: PlayerConfig) -> PlayerController<RecordingEngine> {
    PlayerController::with_rng(
        RecordingEngine::default(),
        config,
        StdRng::seed_from_u64(0x5eed),
    )
}
