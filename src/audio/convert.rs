//! Signed 16-bit PCM to normalized `f32` conversion.

/// Overall output level applied to every converted sample.
pub const GAIN: f32 = 1.0;

/// Full-scale magnitude of a signed 16-bit sample.
const I16_FULL_SCALE: f32 = 32768.0;

/// Convert one PCM sample to `f32` in roughly `[-1.0, 1.0)`.
///
/// `-32768` maps to exactly `-GAIN`. No clamping is applied.
#[inline]
pub fn convert(sample: i16) -> f32 {
    sample as f32 * GAIN / I16_FULL_SCALE
}

/// Convert `samples` in index order into `out`, replacing its contents.
///
/// Only allocates when `out` has less capacity than `samples.len()`.
pub fn convert_into(samples: &[i16], out: &mut Vec<f32>) {
    out.clear();
    out.extend(samples.iter().map(|&s| convert(s)));
}
