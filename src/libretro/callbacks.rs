//! `extern "C"` sample callbacks handed to the core.
//!
//! libretro callbacks carry no user data, so the bridge they dispatch to is
//! kept in a process-wide slot. Only one core runs per process.
//!
//! The sample callbacks only ever `try_lock` the slot. While another caller
//! holds it (an application thread in [`with_active`], or a core answering
//! [`AudioCallback::run`] from inside one) the samples are dropped and the
//! batch callback still reports every frame consumed.

use std::sync::{Mutex, MutexGuard, TryLockError};

use super::sys::{
    retro_audio_sample_batch_t, retro_audio_sample_t, retro_set_audio_sample_batch_t,
    retro_set_audio_sample_t,
};
use super::descriptor::{AudioCallback, BufferStatusCallback};
use crate::audio::AudioBridge;
use crate::audio::bridge::CHANNELS;

static ACTIVE: Mutex<Option<AudioBridge>> = Mutex::new(None);

fn active() -> MutexGuard<'static, Option<AudioBridge>> {
    // Recover a poisoned slot rather than panic.
    ACTIVE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Non-blocking variant for the audio thread; `None` while the slot is held.
fn try_active() -> Option<MutexGuard<'static, Option<AudioBridge>>> {
    match ACTIVE.try_lock() {
        Ok(guard) => Some(guard),
        Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
        Err(TryLockError::WouldBlock) => None,
    }
}

/// Make `bridge` the target of the sample callbacks.
///
/// Returns the previously installed bridge, if any. Callers should close the
/// gate of the old bridge before swapping while the core is running.
pub fn install(bridge: AudioBridge) -> Option<AudioBridge> {
    let previous = active().replace(bridge);
    log::info!("AudioBridge installed (replaced existing: {})", previous.is_some());
    previous
}

/// Remove the active bridge. Samples arriving afterwards are dropped.
pub fn uninstall() -> Option<AudioBridge> {
    active().take()
}

/// Run `f` against the active bridge, or return `None` if none is installed.
///
/// Sample callbacks arriving while `f` runs are dropped. Copy stored core
/// callbacks out with [`audio_callback`] / [`buffer_status_callback`] before
/// invoking them, so the audio the core writes in response reaches the sink.
pub fn with_active<R>(f: impl FnOnce(&mut AudioBridge) -> R) -> Option<R> {
    active().as_mut().map(f)
}

/// Copy of the ready/set-state pair the core registered with the active bridge.
pub fn audio_callback() -> Option<AudioCallback> {
    with_active(|bridge| bridge.audio_callback().copied()).flatten()
}

/// Copy of the buffer status reporter the core registered with the active bridge.
pub fn buffer_status_callback() -> Option<BufferStatusCallback> {
    with_active(|bridge| bridge.buffer_status_callback().copied()).flatten()
}

/// Hand the sample callbacks to the core through its registration functions.
///
/// # Safety
///
/// Both functions must be the core's valid `retro_set_audio_sample` and
/// `retro_set_audio_sample_batch` exports.
pub unsafe fn register_core_callbacks(
    set_audio_sample: retro_set_audio_sample_t,
    set_audio_sample_batch: retro_set_audio_sample_batch_t,
) {
    unsafe {
        set_audio_sample(audio_sample_callback());
        set_audio_sample_batch(audio_sample_batch_callback());
    }
    log::debug!("Audio sample callbacks registered with core");
}

/// Address of the single-frame callback.
pub fn audio_sample_callback() -> retro_audio_sample_t {
    audio_sample
}

/// Address of the batch callback.
pub fn audio_sample_batch_callback() -> retro_audio_sample_batch_t {
    audio_sample_batch
}

extern "C" fn audio_sample(left: i16, right: i16) {
    let Some(mut guard) = try_active() else {
        log::trace!("Bridge busy, dropping frame");
        return;
    };
    if let Some(bridge) = guard.as_mut() {
        bridge.on_single_frame(left, right);
    }
}

extern "C" fn audio_sample_batch(data: *const i16, frames: usize) -> usize {
    let Some(mut guard) = try_active() else {
        log::trace!("Bridge busy, dropping {} frames", frames);
        return frames;
    };
    let Some(bridge) = guard.as_mut() else {
        return frames;
    };
    if !bridge.is_enabled() || frames == 0 {
        return frames;
    }
    if data.is_null() {
        log::warn!("Core sent {} frames with a null buffer", frames);
        return frames;
    }
    let Some(len) = frames.checked_mul(CHANNELS) else {
        return frames;
    };

    // SAFETY: the core guarantees `data` holds `frames` interleaved stereo
    // frames for the duration of this call.
    let samples = unsafe { std::slice::from_raw_parts(data, len) };
    bridge.on_batch(samples)
}
