use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Initial state of the gate
    pub start_enabled: bool,
    /// Frames of normalized scratch buffer allocated up front
    pub reserve_frames: usize,
    /// Queue depth used by `ChannelSink`
    pub channel_capacity: usize,
}

impl Config {
    /// Build the config from environment variables set at compile time.
    /// `build.rs` reads every value from config.toml.
    pub fn new() -> Result<Self> {
        Ok(Self {
            start_enabled: env!("AUDIO_START_ENABLED")
                .parse()
                .context("Failed to parse AUDIO_START_ENABLED")?,
            reserve_frames: env!("AUDIO_RESERVE_FRAMES")
                .parse()
                .context("Failed to parse AUDIO_RESERVE_FRAMES")?,
            channel_capacity: env!("AUDIO_CHANNEL_CAPACITY")
                .parse()
                .context("Failed to parse AUDIO_CHANNEL_CAPACITY")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_enabled: true,
            reserve_frames: 2048,
            channel_capacity: 32,
        }
    }
}
