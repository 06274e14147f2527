//! Decoding of the opaque negotiation payloads a core passes to the frontend.
//!
//! Every raw pointer read for audio negotiation happens here, one function per
//! descriptor kind. Each returns `None` when the core handed over nothing usable.

use std::ffi::{c_uint, c_void};

use super::sys::{
    retro_audio_buffer_status_callback, retro_audio_buffer_status_callback_t,
    retro_audio_callback, retro_audio_callback_t, retro_audio_set_state_callback_t,
};

/// Ready/set-state pair registered through `SET_AUDIO_CALLBACK`.
#[derive(Debug, Clone, Copy)]
pub struct AudioCallback {
    callback: retro_audio_callback_t,
    set_state: Option<retro_audio_set_state_callback_t>,
}

impl AudioCallback {
    pub fn new(
        callback: retro_audio_callback_t,
        set_state: Option<retro_audio_set_state_callback_t>,
    ) -> Self {
        Self {
            callback,
            set_state,
        }
    }

    /// Tell the core it may write more audio.
    pub fn run(&self) {
        (self.callback)();
    }

    /// Tell the core whether audio output is running.
    pub fn set_state(&self, enabled: bool) {
        if let Some(set_state) = self.set_state {
            set_state(enabled);
        }
    }
}

/// Buffer fullness reporter registered through `SET_AUDIO_BUFFER_STATUS_CALLBACK`.
#[derive(Debug, Clone, Copy)]
pub struct BufferStatusCallback {
    callback: retro_audio_buffer_status_callback_t,
}

impl BufferStatusCallback {
    pub fn new(callback: retro_audio_buffer_status_callback_t) -> Self {
        Self { callback }
    }

    /// * `active`          - Whether the frontend is actively playing audio
    /// * `occupancy`       - Output buffer fill level in percent, clamped to 100
    /// * `underrun_likely` - Whether an underrun is expected soon
    pub fn report(&self, active: bool, occupancy: u32, underrun_likely: bool) {
        (self.callback)(active, occupancy.min(100) as c_uint, underrun_likely);
    }
}

/// Decode a `retro_audio_callback` payload.
///
/// # Safety
///
/// `data` must be null or point to a readable `retro_audio_callback`.
pub unsafe fn decode_audio_callback(data: *const c_void) -> Option<AudioCallback> {
    if data.is_null() {
        return None;
    }
    let payload = unsafe { (data as *const retro_audio_callback).read_unaligned() };
    Some(AudioCallback::new(payload.callback?, payload.set_state))
}

/// Decode a `retro_audio_buffer_status_callback` payload.
///
/// # Safety
///
/// `data` must be null or point to a readable `retro_audio_buffer_status_callback`.
pub unsafe fn decode_buffer_status_callback(data: *const c_void) -> Option<BufferStatusCallback> {
    if data.is_null() {
        return None;
    }
    let payload = unsafe { (data as *const retro_audio_buffer_status_callback).read_unaligned() };
    Some(BufferStatusCallback::new(payload.callback?))
}

/// Decode the `unsigned` payload of `SET_MINIMUM_AUDIO_LATENCY`, in milliseconds.
///
/// # Safety
///
/// `data` must be null or point to a readable `unsigned`.
pub unsafe fn decode_minimum_latency(data: *const c_void) -> Option<u32> {
    if data.is_null() {
        return None;
    }
    Some(unsafe { (data as *const c_uint).read_unaligned() })
}
