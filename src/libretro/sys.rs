//! C ABI declarations for the audio half of the libretro interface.

#![allow(non_camel_case_types)]

use std::ffi::c_uint;

// ======================== Environment commands ========================

pub const RETRO_ENVIRONMENT_EXPERIMENTAL: c_uint = 0x10000;
pub const RETRO_ENVIRONMENT_SET_AUDIO_CALLBACK: c_uint = 22;
pub const RETRO_ENVIRONMENT_SET_AUDIO_BUFFER_STATUS_CALLBACK: c_uint = 62;
pub const RETRO_ENVIRONMENT_SET_MINIMUM_AUDIO_LATENCY: c_uint = 63;

// ======================== Sample callbacks ========================

/// Renders a single stereo frame.
pub type retro_audio_sample_t = extern "C" fn(left: i16, right: i16);

/// Renders `frames` interleaved stereo frames; returns frames consumed.
pub type retro_audio_sample_batch_t = extern "C" fn(data: *const i16, frames: usize) -> usize;

/// Core entry point the frontend uses to hand over `retro_audio_sample_t`.
pub type retro_set_audio_sample_t = unsafe extern "C" fn(cb: retro_audio_sample_t);

/// Core entry point the frontend uses to hand over `retro_audio_sample_batch_t`.
pub type retro_set_audio_sample_batch_t = unsafe extern "C" fn(cb: retro_audio_sample_batch_t);

// ======================== Negotiation descriptors ========================

/// Core wants more audio written.
pub type retro_audio_callback_t = extern "C" fn();

/// Frontend tells the core whether audio is currently running.
pub type retro_audio_set_state_callback_t = extern "C" fn(enabled: bool);

/// Frontend reports output buffer fullness (`occupancy` is 0..=100).
pub type retro_audio_buffer_status_callback_t =
    extern "C" fn(active: bool, occupancy: c_uint, underrun_likely: bool);

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct retro_audio_callback {
    pub callback: Option<retro_audio_callback_t>,
    pub set_state: Option<retro_audio_set_state_callback_t>,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct retro_audio_buffer_status_callback {
    pub callback: Option<retro_audio_buffer_status_callback_t>,
}
