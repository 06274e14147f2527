//! Raw-pointer negotiation entry points and the environment command router.

use std::ffi::{c_uint, c_void};

use super::descriptor::{decode_audio_callback, decode_buffer_status_callback, decode_minimum_latency};
use super::sys::{
    RETRO_ENVIRONMENT_EXPERIMENTAL, RETRO_ENVIRONMENT_SET_AUDIO_BUFFER_STATUS_CALLBACK,
    RETRO_ENVIRONMENT_SET_AUDIO_CALLBACK, RETRO_ENVIRONMENT_SET_MINIMUM_AUDIO_LATENCY,
};
use crate::audio::AudioBridge;

/// Store the ready/set-state pair from a `retro_audio_callback` payload.
///
/// Returns `false` and leaves `bridge` untouched when `data` is null.
///
/// # Safety
///
/// `data` must be null or point to a readable `retro_audio_callback`.
pub unsafe fn set_audio_callback(bridge: &mut AudioBridge, data: *const c_void) -> bool {
    match unsafe { decode_audio_callback(data) } {
        Some(callback) => {
            bridge.set_audio_callback(callback);
            true
        }
        None => {
            log::debug!("Core offered no usable audio callback");
            false
        }
    }
}

/// Store the reporter from a `retro_audio_buffer_status_callback` payload.
///
/// # Safety
///
/// `data` must be null or point to a readable `retro_audio_buffer_status_callback`.
pub unsafe fn set_buffer_status_callback(bridge: &mut AudioBridge, data: *const c_void) -> bool {
    match unsafe { decode_buffer_status_callback(data) } {
        Some(callback) => {
            bridge.set_buffer_status_callback(callback);
            true
        }
        None => {
            log::debug!("Core offered no usable buffer status callback");
            false
        }
    }
}

/// Store the latency hint from a `SET_MINIMUM_AUDIO_LATENCY` payload.
///
/// # Safety
///
/// `data` must be null or point to a readable `unsigned`.
pub unsafe fn set_minimum_latency(bridge: &mut AudioBridge, data: *const c_void) -> bool {
    match unsafe { decode_minimum_latency(data) } {
        Some(latency) => {
            log::info!("Core requested minimum audio latency: {}ms", latency);
            bridge.set_minimum_latency(latency);
            true
        }
        None => {
            log::debug!("Core sent empty minimum latency request");
            false
        }
    }
}

/// Route an environment command to the audio negotiation it belongs to.
///
/// Returns `None` for commands that are not audio negotiation, so the caller
/// can hand them to its other handlers.
///
/// # Safety
///
/// `data` must be null or point to the payload type `cmd` defines.
pub unsafe fn handle_environment(
    bridge: &mut AudioBridge,
    cmd: c_uint,
    data: *mut c_void,
) -> Option<bool> {
    let data = data as *const c_void;
    let handled = match cmd & !RETRO_ENVIRONMENT_EXPERIMENTAL {
        RETRO_ENVIRONMENT_SET_AUDIO_CALLBACK => unsafe { set_audio_callback(bridge, data) },
        RETRO_ENVIRONMENT_SET_AUDIO_BUFFER_STATUS_CALLBACK => unsafe {
            set_buffer_status_callback(bridge, data)
        },
        RETRO_ENVIRONMENT_SET_MINIMUM_AUDIO_LATENCY => unsafe { set_minimum_latency(bridge, data) },
        _ => return None,
    };
    Some(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::libretro::sys::{retro_audio_buffer_status_callback, retro_audio_callback};
    use std::ptr;

    extern "C" fn ready() {}

    extern "C" fn status(_active: bool, _occupancy: c_uint, _underrun: bool) {}

    fn bridge() -> AudioBridge {
        let mut bridge = AudioBridge::new(&Config::default());
        bridge.init(None, 44100.0);
        bridge
    }

    #[test]
    fn null_descriptors_fail_without_mutation() {
        let mut bridge = bridge();
        let latency: c_uint = 256;
        let audio = retro_audio_callback {
            callback: Some(ready),
            set_state: None,
        };
        let status_cb = retro_audio_buffer_status_callback {
            callback: Some(status),
        };

        unsafe {
            assert!(set_minimum_latency(&mut bridge, &latency as *const _ as *const c_void));
            assert!(set_audio_callback(&mut bridge, &audio as *const _ as *const c_void));
            assert!(set_buffer_status_callback(
                &mut bridge,
                &status_cb as *const _ as *const c_void
            ));

            assert!(!set_minimum_latency(&mut bridge, ptr::null()));
            assert!(!set_audio_callback(&mut bridge, ptr::null()));
            assert!(!set_buffer_status_callback(&mut bridge, ptr::null()));
        }

        assert_eq!(bridge.minimum_latency(), 256);
        assert!(bridge.audio_callback().is_some());
        assert!(bridge.buffer_status_callback().is_some());
    }

    #[test]
    fn null_descriptors_on_fresh_bridge_store_nothing() {
        let mut bridge = bridge();
        unsafe {
            assert!(!set_audio_callback(&mut bridge, ptr::null()));
            assert!(!set_buffer_status_callback(&mut bridge, ptr::null()));
            assert!(!set_minimum_latency(&mut bridge, ptr::null()));
        }
        assert!(bridge.audio_callback().is_none());
        assert!(bridge.buffer_status_callback().is_none());
        assert_eq!(bridge.minimum_latency(), 0);
    }

    #[test]
    fn minimum_latency_overwrites() {
        let mut bridge = bridge();
        let first: c_uint = 512;
        let second: c_uint = 128;
        unsafe {
            assert!(set_minimum_latency(&mut bridge, &first as *const _ as *const c_void));
            assert_eq!(bridge.minimum_latency(), 512);
            assert!(set_minimum_latency(&mut bridge, &second as *const _ as *const c_void));
        }
        assert_eq!(bridge.minimum_latency(), 128);
    }

    #[test]
    fn routes_audio_commands() {
        let mut bridge = bridge();
        let mut latency: c_uint = 80;
        let data = &mut latency as *mut _ as *mut c_void;
        unsafe {
            assert_eq!(
                handle_environment(&mut bridge, RETRO_ENVIRONMENT_SET_MINIMUM_AUDIO_LATENCY, data),
                Some(true)
            );
            assert_eq!(
                handle_environment(
                    &mut bridge,
                    RETRO_ENVIRONMENT_SET_AUDIO_CALLBACK | RETRO_ENVIRONMENT_EXPERIMENTAL,
                    ptr::null_mut()
                ),
                Some(false)
            );
            assert_eq!(handle_environment(&mut bridge, 10, data), None);
        }
        assert_eq!(bridge.minimum_latency(), 80);
    }
}
