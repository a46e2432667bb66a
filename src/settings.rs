//! Run settings
//!
//! Loaded from a JSON file natively and from LocalStorage in the browser.
//! Missing fields take their defaults; anything unreadable falls back to
//! [`Settings::default`].

use serde::{Deserialize, Serialize};

/// Which entity seeds the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Chases targets, grows and splits until saturated
    #[default]
    Seeking,
    /// Hops around a ring on a timer and pops under the pointer
    Relocating,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Seeking => "seeking",
            EntityKind::Relocating => "relocating",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "seeking" | "seek" => Some(EntityKind::Seeking),
            "relocating" | "relocate" => Some(EntityKind::Relocating),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Entity placed at the origin on startup
    pub kind: EntityKind,
    /// Also add a keyboard-driven player
    pub player: bool,

    // === Native run ===
    /// World width in pixels (the browser uses the window size)
    pub world_width: u32,
    /// World height in pixels
    pub world_height: u32,
    /// Time between frames in milliseconds
    pub frame_interval_ms: f64,
    /// Frames to run before stopping (None = until interrupted)
    pub max_frames: Option<u64>,
    /// Sleep between frames instead of running as fast as possible
    pub realtime: bool,
    /// Log population every N frames (0 = never)
    pub log_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kind: EntityKind::Seeking,
            player: false,

            world_width: 800,
            world_height: 600,
            frame_interval_ms: 1000.0 / 60.0,
            max_frames: Some(3600),
            realtime: false,
            log_every: 300,
        }
    }
}

impl Settings {
    /// Environment variable holding a settings path (native)
    pub const ENV_PATH: &'static str = "BALL_MITOSIS_SETTINGS";

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "ball_mitosis_settings";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from the path in [`Self::ENV_PATH`], if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_PATH) {
            Ok(path) => Self::load_from(&path),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Invalid stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{ "kind": "relocating", "world_width": 200 }"#)
            .expect("valid json");
        assert_eq!(settings.kind, EntityKind::Relocating);
        assert_eq!(settings.world_width, 200);
        assert_eq!(settings.world_height, Settings::default().world_height);
        assert!(!settings.player);
    }

    #[test]
    fn test_unbounded_run() {
        let settings = Settings::from_json(r#"{ "max_frames": null }"#).expect("valid json");
        assert_eq!(settings.max_frames, None);
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(Settings::from_json(r#"{ "kind": "teleporting" }"#).is_err());
    }

    #[test]
    fn test_json_survives_reload() {
        let mut settings = Settings::default();
        settings.player = true;
        settings.kind = EntityKind::Relocating;
        let reloaded = Settings::from_json(&settings.to_json()).expect("valid json");
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(EntityKind::from_str("Seek"), Some(EntityKind::Seeking));
        assert_eq!(EntityKind::from_str("RELOCATING"), Some(EntityKind::Relocating));
        assert_eq!(EntityKind::from_str("nope"), None);
        assert_eq!(EntityKind::Relocating.as_str(), "relocating");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from("/nonexistent/ball-mitosis.json");
        assert_eq!(settings, Settings::default());
    }
}
