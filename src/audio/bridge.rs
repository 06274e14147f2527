//! The AudioBridge that turns core PCM callbacks into sink calls.
//!
//! Runs on whatever thread the core renders audio from. Nothing here blocks
//! or spawns; the only state touched from other threads is the [`AudioGate`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::convert::{convert, convert_into};
use super::sink::{AudioSink, NullSink};
use crate::config::Config;
use crate::libretro::descriptor::{AudioCallback, BufferStatusCallback};

/// Samples per frame; the core always delivers interleaved stereo.
pub const CHANNELS: usize = 2;

/// Enable flag shared between the application and the audio thread.
///
/// Stores use `Release` and loads use `Acquire`, so a toggle is visible to
/// the next callback the core makes.
#[derive(Debug, Clone)]
pub struct AudioGate(Arc<AtomicBool>);

impl AudioGate {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Release);
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Values the core registered through environment negotiation.
#[derive(Debug, Default, Clone, Copy)]
struct Negotiated {
    audio_callback: Option<AudioCallback>,
    buffer_status: Option<BufferStatusCallback>,
    minimum_latency: u32,
}

pub struct AudioBridge {
    sink: Box<dyn AudioSink>,
    gate: AudioGate,
    scratch: Vec<f32>,
    negotiated: Negotiated,
}

impl AudioBridge {
    /// Create a bridge with a `NullSink`; call [`AudioBridge::init`] before
    /// handing its callbacks to the core.
    pub fn new(config: &Config) -> Self {
        Self {
            sink: Box::new(NullSink),
            gate: AudioGate::new(config.start_enabled),
            scratch: Vec::with_capacity(config.reserve_frames * CHANNELS),
            negotiated: Negotiated::default(),
        }
    }

    /// Install `sink` (or a `NullSink` for `None`) and initialize it.
    ///
    /// * `sink`        - Consumer for normalized audio
    /// * `sample_rate` - Output rate reported by the loaded core
    ///
    /// A sink that fails to initialize is replaced by a `NullSink`.
    pub fn init(&mut self, sink: Option<Box<dyn AudioSink>>, sample_rate: f64) {
        let mut sink = sink.unwrap_or_else(|| Box::new(NullSink));
        if let Err(e) = sink.init(sample_rate) {
            log::error!("Audio sink init failed, audio disabled: {:#}", e);
            sink.dispose();
            sink = Box::new(NullSink);
        }
        self.sink = sink;

        log::info!(
            "AudioBridge initialized: rate={}Hz, enabled={}",
            sample_rate,
            self.gate.is_enabled(),
        );
    }

    /// A handle for toggling the gate from another thread.
    pub fn gate(&self) -> AudioGate {
        self.gate.clone()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.gate.set(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Single stereo frame from the core.
    pub fn on_single_frame(&mut self, left: i16, right: i16) {
        if !self.gate.is_enabled() {
            return;
        }

        let buffer = [convert(left), convert(right)];
        self.sink.process(&buffer);
    }

    /// Interleaved stereo frames from the core. Returns the number of frames
    /// consumed, which is always every frame given, even while the gate is
    /// closed and the samples are discarded.
    ///
    /// `samples.len()` should be a multiple of [`CHANNELS`]; a trailing
    /// partial frame is logged and left unconverted.
    pub fn on_batch(&mut self, samples: &[i16]) -> usize {
        let frames = samples.len() / CHANNELS;
        let partial = samples.len() % CHANNELS;
        if partial != 0 {
            log::debug!(
                "Batch of {} samples ends in a partial frame, ignoring {} sample(s)",
                samples.len(),
                partial,
            );
        }
        if !self.gate.is_enabled() {
            return frames;
        }

        convert_into(&samples[..frames * CHANNELS], &mut self.scratch);
        log::trace!("Batch: frames={}, samples={}", frames, self.scratch.len());
        self.sink.process(&self.scratch);
        frames
    }

    pub fn set_audio_callback(&mut self, callback: AudioCallback) {
        self.negotiated.audio_callback = Some(callback);
    }

    pub fn set_buffer_status_callback(&mut self, callback: BufferStatusCallback) {
        self.negotiated.buffer_status = Some(callback);
    }

    pub fn set_minimum_latency(&mut self, latency: u32) {
        self.negotiated.minimum_latency = latency;
    }

    /// Ready/set-state notifiers registered by the core, if any.
    pub fn audio_callback(&self) -> Option<&AudioCallback> {
        self.negotiated.audio_callback.as_ref()
    }

    /// Buffer fullness reporter registered by the core, if any.
    pub fn buffer_status_callback(&self) -> Option<&BufferStatusCallback> {
        self.negotiated.buffer_status.as_ref()
    }

    /// Minimum latency hint in milliseconds; 0 when the core never set one.
    pub fn minimum_latency(&self) -> u32 {
        self.negotiated.minimum_latency
    }

    /// Release the sink's resources. Safe to call more than once.
    pub fn dispose(&mut self) {
        let mut sink = std::mem::replace(&mut self.sink, Box::new(NullSink));
        sink.dispose();
    }
}

impl Drop for AudioBridge {
    fn drop(&mut self) {
        self.dispose();
    }
}
