//! Audio bridge between a libretro core and an application audio sink.

pub mod audio;
pub mod config;
pub mod libretro;

pub use audio::{AudioBridge, AudioGate, AudioSink, ChannelSink, NullSink};
pub use config::Config;
