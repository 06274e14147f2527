//! Sink that hands normalized buffers to another thread over a bounded channel.

use anyhow::Result;
use tokio::sync::mpsc::{self, error::TrySendError};

use super::sink::AudioSink;

/// Forwards every buffer to a `tokio::sync::mpsc` channel.
///
/// Uses `try_send` so the core's audio thread never waits on the consumer;
/// buffers that do not fit are dropped and counted.
pub struct ChannelSink {
    tx: Option<mpsc::Sender<Vec<f32>>>,
    sample_rate: f64,
    dropped: u64,
}

impl ChannelSink {
    /// Create a sink and the receiver the consumer drains.
    ///
    /// * `capacity` - Maximum number of queued buffers (at least 1)
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Vec<f32>>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let sink = Self {
            tx: Some(tx),
            sample_rate: 0.0,
            dropped: 0,
        };
        (sink, rx)
    }

    /// Sample rate passed to `init`, or 0 before initialization.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of buffers discarded because the queue was full or closed.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl AudioSink for ChannelSink {
    fn init(&mut self, sample_rate: f64) -> Result<()> {
        if sample_rate.is_nan() || sample_rate <= 0.0 {
            anyhow::bail!("Invalid sample rate: {}", sample_rate);
        }
        self.sample_rate = sample_rate;
        log::info!("ChannelSink ready: rate={}Hz", sample_rate);
        Ok(())
    }

    fn process(&mut self, samples: &[f32]) {
        let Some(tx) = &self.tx else {
            self.dropped += 1;
            return;
        };

        match tx.try_send(samples.to_vec()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                if self.dropped == 0 {
                    log::warn!("ChannelSink queue full, dropping buffers");
                }
                self.dropped += 1;
            }
            Err(TrySendError::Closed(_)) => {
                log::warn!("ChannelSink receiver dropped, closing sink");
                self.tx = None;
                self.dropped += 1;
            }
        }
    }

    fn dispose(&mut self) {
        // Dropping the sender lets the consumer observe end of stream.
        if self.tx.take().is_some() {
            log::info!("ChannelSink closed, {} buffers dropped", self.dropped);
        }
    }
}
