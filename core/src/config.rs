//! Kiosk configuration, managed by confy (`loopkiosk.toml` under the
//! platform config directory). Every field has a default so a missing
//! file just runs the standard kiosk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "loopkiosk";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// URL or local path of the looping video asset.
    pub video_source: String,

    /// Length of one playback loop, in seconds. Must exceed the timeline
    /// span (42.29 s) or late events never fire within a loop.
    pub loop_secs: f64,

    /// Cadence of playback position updates, in milliseconds.
    pub position_update_ms: u64,

    /// Override for the counter data directory. Defaults to the platform
    /// data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            video_source: "video.mp4".to_string(),
            loop_secs: 43.0,
            position_update_ms: 250,
            data_dir: None,
        }
    }
}

/// Load the persisted config, creating a default file on first run.
pub fn load_config() -> Result<KioskConfig, confy::ConfyError> {
    confy::load(APP_NAME, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loop_outlasts_the_timeline() {
        let config = KioskConfig::default();
        assert!(config.loop_secs > 42.29);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = KioskConfig {
            video_source: "https://example.test/video.mp4".into(),
            loop_secs: 44.5,
            position_update_ms: 100,
            data_dir: Some(PathBuf::from("/tmp/kiosk")),
        };
        let text = toml::to_string(&config).unwrap();
        let back: KioskConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.video_source, config.video_source);
        assert_eq!(back.position_update_ms, 100);
    }
}
