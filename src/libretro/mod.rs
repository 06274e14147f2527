//! libretro - Boundary between the bridge and a native libretro core
//!
//! Holds the C ABI types, the decoders for negotiation payloads, the
//! environment command router, and the `extern "C"` sample callbacks.

mod callbacks;
pub mod descriptor;
pub mod environment;
pub mod sys;

pub use callbacks::{
    audio_callback, audio_sample_batch_callback, audio_sample_callback, buffer_status_callback,
    install, register_core_callbacks, uninstall, with_active,
};
pub use descriptor::{AudioCallback, BufferStatusCallback};
pub use environment::handle_environment;
