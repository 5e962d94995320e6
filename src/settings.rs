//! Game settings
//!
//! Read from LocalStorage on the web; from a JSON file named by
//! `CANVAS_PONG_SETTINGS` on native. Missing fields fall back to defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;
use crate::sim::{CollisionRule, Playfield, Rules};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width (overridden by the canvas width on the web)
    pub playfield_width: f32,
    /// Playfield height (overridden by the canvas height on the web)
    pub playfield_height: f32,

    // === Loop ===
    /// Ticks per second
    pub tick_rate: f32,

    // === Rules ===
    /// Ball-vs-paddle containment test
    pub collision_rule: CollisionRule,
    /// Re-centre the ball after every point
    pub reset_after_point: bool,
    /// Paddle travel per tick while a key is held
    pub paddle_speed: f32,

    // === Entities ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    /// Serve velocity, per tick
    pub ball_velocity: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            tick_rate: TICK_RATE,

            collision_rule: CollisionRule::default(),
            reset_after_point: false,
            paddle_speed: PADDLE_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            ball_radius: BALL_RADIUS,
            ball_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),
        }
    }
}

impl Settings {
    /// Replace the playfield size (the web build sizes it from the canvas)
    pub fn with_playfield(mut self, width: f32, height: f32) -> Self {
        self.playfield_width = width;
        self.playfield_height = height;
        self
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            collision: self.collision_rule,
            reset_after_point: self.reset_after_point,
            paddle_speed: self.paddle_speed,
        }
    }

    /// Interval between ticks
    pub fn tick_interval(&self) -> Result<std::time::Duration, SetupError> {
        std::time::Duration::try_from_secs_f32(1.0 / self.tick_rate).map_err(|e| {
            SetupError::InvalidSettings(format!(
                "tick_rate {} has no interval: {e}",
                self.tick_rate
            ))
        })
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SetupError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(SetupError::InvalidSettings(format!(
                    "{name} must be positive, got {v}"
                )))
            }
        };

        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("tick_rate", self.tick_rate)?;
        if !(MIN_TICK_RATE..=MAX_TICK_RATE).contains(&self.tick_rate) {
            return Err(SetupError::InvalidSettings(format!(
                "tick_rate must be between {MIN_TICK_RATE} and {MAX_TICK_RATE}, got {}",
                self.tick_rate
            )));
        }
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_radius", self.ball_radius)?;

        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            return Err(SetupError::InvalidSettings(format!(
                "paddle_speed must be non-negative, got {}",
                self.paddle_speed
            )));
        }
        if !self.paddle_inset.is_finite() || self.paddle_inset < 0.0 {
            return Err(SetupError::InvalidSettings(format!(
                "paddle_inset must be non-negative, got {}",
                self.paddle_inset
            )));
        }
        if !self.ball_velocity.is_finite() {
            return Err(SetupError::InvalidSettings(
                "ball_velocity must be finite".to_string(),
            ));
        }
        if self.paddle_width > self.playfield_width {
            return Err(SetupError::InvalidSettings(format!(
                "paddle_width {} does not fit playfield width {}",
                self.paddle_width, self.playfield_width
            )));
        }
        if 2.0 * (self.paddle_inset + self.paddle_height) > self.playfield_height {
            return Err(SetupError::InvalidSettings(format!(
                "paddles overlap on a playfield {} high",
                self.playfield_height
            )));
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Environment variable naming a JSON settings file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub const ENV_VAR: &'static str = "CANVAS_PONG_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    ///
    /// Stored JSON that no longer parses is ignored in favour of defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SetupError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return Ok(settings);
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Ok(Self::default())
    }

    /// Load settings from the file named by `CANVAS_PONG_SETTINGS`, or
    /// defaults when it is unset
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SetupError> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(std::path::Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, SetupError> {
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::SettingsIo {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), SetupError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SetupError::SettingsIo {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_canvas() {
        let settings = Settings::default();
        assert_eq!(settings.playfield(), Playfield::new(800.0, 500.0));
        assert_eq!(settings.ball_velocity, Vec2::new(2.0, 7.0));
        assert_eq!(settings.collision_rule, CollisionRule::Uniform);
        assert!(!settings.reset_after_point);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{ "tick_rate": 30.0, "collision_rule": "Legacy" }"#).unwrap();
        assert_eq!(settings.tick_rate, 30.0);
        assert_eq!(settings.collision_rule, CollisionRule::Legacy);
        assert_eq!(settings.playfield_width, PLAYFIELD_WIDTH);
        assert_eq!(settings.paddle_speed, PADDLE_SPEED);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Settings::from_json("{ tick_rate: ").unwrap_err();
        assert!(matches!(err, SetupError::SettingsParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_rate = Settings {
            tick_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_rate.validate(),
            Err(SetupError::InvalidSettings(_))
        ));

        let wide_paddle = Settings {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(wide_paddle.validate().is_err());

        let nan_field = Settings::default().with_playfield(f32::NAN, 500.0);
        assert!(nan_field.validate().is_err());

        let cramped = Settings::default().with_playfield(800.0, 15.0);
        assert!(cramped.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_extreme_tick_rate() {
        let crawling = Settings::from_json(r#"{ "tick_rate": 1e-20 }"#).unwrap();
        assert!(matches!(
            crawling.validate(),
            Err(SetupError::InvalidSettings(_))
        ));
        assert!(matches!(
            crawling.tick_interval(),
            Err(SetupError::InvalidSettings(_))
        ));

        let racing = Settings {
            tick_rate: 1e6,
            ..Default::default()
        };
        assert!(racing.validate().is_err());

        let slowest = Settings {
            tick_rate: MIN_TICK_RATE,
            ..Default::default()
        };
        assert!(slowest.validate().is_ok());
        assert_eq!(slowest.tick_interval().unwrap().as_secs(), 1);
    }

    #[test]
    fn test_tick_interval() {
        let settings = Settings::default();
        let interval = settings.tick_interval().unwrap();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "canvas_pong_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            reset_after_point: true,
            paddle_speed: 9.0,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Settings::load_from(std::path::Path::new("/nonexistent/pong.json")).unwrap_err();
        assert!(matches!(err, SetupError::SettingsIo { .. }));
    }
}
