//! audio - Sample path from core PCM to application sink
//!
//! Converts signed 16-bit stereo PCM delivered by the core into normalized
//! `f32` buffers and hands them to an [`AudioSink`], behind an enable gate.

pub mod bridge;
mod channel_sink;
pub mod convert;
mod sink;

pub use bridge::{AudioBridge, AudioGate};
pub use channel_sink::ChannelSink;
pub use sink::{AudioSink, NullSink};
