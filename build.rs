use std::fs;
use std::path::Path;
use serde::Deserialize;

#[derive(Deserialize)]
struct Config {
    audio: Audio,
}

#[derive(Deserialize)]
struct Audio {
    start_enabled: bool,
    reserve_frames: usize,
    channel_capacity: usize,
}

// Read config.toml at build time and export it as environment variables
fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        panic!("config.toml not found!");
    }

    let config_str = fs::read_to_string(config_path).expect("Failed to read config.toml");
    let config: Config = toml::from_str(&config_str).expect("Failed to parse config.toml");

    println!("cargo:rustc-env=AUDIO_START_ENABLED={}", config.audio.start_enabled);
    println!("cargo:rustc-env=AUDIO_RESERVE_FRAMES={}", config.audio.reserve_frames);
    println!("cargo:rustc-env=AUDIO_CHANNEL_CAPACITY={}", config.audio.channel_capacity);
}
