//! Consumer side of the bridge.

use anyhow::Result;

/// A consumer of normalized, interleaved stereo `f32` buffers.
///
/// `process` runs inside the core's audio callback, so implementations
/// must not block or hold on to `samples` past the call.
pub trait AudioSink: Send {
    /// Prepare resources for the given output sample rate. Called once.
    fn init(&mut self, sample_rate: f64) -> Result<()>;

    /// Consume one normalized buffer.
    fn process(&mut self, samples: &[f32]);

    /// Release resources. May be called more than once.
    fn dispose(&mut self) {}
}

/// Sink used when the application does not consume audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn init(&mut self, _sample_rate: f64) -> Result<()> {
        Ok(())
    }

    fn process(&mut self, _samples: &[f32]) {}
}
