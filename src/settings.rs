//! Game settings
//!
//! Every tunable of the game lives here. A settings file may override any
//! subset of keys; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// RGB triple
pub type Rgb = (u8, u8, u8);

/// Inclusive integer range used for randomized respawn positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub low: i32,
    pub high: i32,
}

impl Band {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.low..=self.high)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,
    pub fps: u32,

    // === Ship ===
    pub ship_speed: f32,
    pub ship_lives: u32,
    pub ship_image: String,
    /// Ticks the update phase is skipped after losing a life
    pub hit_pause_ticks: u32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,

    // === Obstacles ===
    pub obstacle_speed: f32,
    pub obstacle_respawn_offset: Band,
    pub obstacle_band: Band,
    pub starter_obstacles: Vec<String>,

    // === Clouds ===
    /// Scroll speed of the background (the clouds)
    pub game_speed: f32,
    pub cloud_respawn_offset: Band,
    pub cloud_band: Band,
    pub clouds: Vec<String>,

    // === Scoring ===
    pub points: u32,
    pub life_icon: String,
    pub score_color: Rgb,
    pub score_margin: i32,
    pub lives_origin: (i32, i32),

    // === Start button ===
    pub button_width: i32,
    pub button_height: i32,
    pub button_color: Rgb,
    pub button_text_color: Rgb,
    pub button_label: String,
    pub restart_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1100,
            screen_height: 600,
            bg_color: (103, 178, 255),
            fps: 60,

            ship_speed: 7.0,
            ship_lives: 3,
            ship_image: "ship".to_string(),
            hit_pause_ticks: 18,

            bullet_speed: 8.0,
            bullet_width: 20,
            bullet_height: 7,
            bullet_color: (255, 60, 60),

            obstacle_speed: 6.0,
            obstacle_respawn_offset: Band::new(2000, 3000),
            obstacle_band: Band::new(250, 450),
            starter_obstacles: ["bird", "emerald", "bird1", "box"]
                .iter()
                .map(|s| s.to_string())
                .collect(),

            game_speed: 10.0,
            cloud_respawn_offset: Band::new(1000, 2000),
            cloud_band: Band::new(20, 50),
            clouds: vec!["cloud1".to_string(), "cloud2".to_string()],

            points: 10,
            life_icon: "heart".to_string(),
            score_color: (30, 30, 30),
            score_margin: 20,
            lives_origin: (10, 10),

            button_width: 200,
            button_height: 50,
            button_color: (0, 30, 100),
            button_text_color: (255, 255, 255),
            button_label: "Start".to_string(),
            restart_label: "Restart".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, keeping defaults for absent keys.
    pub fn load(path: &Path) -> Result<Self> {
        let config_err = |reason: String| GameError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let json = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        let settings: Self = serde_json::from_str(&json).map_err(|e| config_err(e.to_string()))?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(GameError::InvalidSettings(msg.to_string()));
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return invalid("screen dimensions must be positive");
        }
        if self.ship_lives == 0 {
            return invalid("ship_lives must be at least 1");
        }
        if self.fps == 0 {
            return invalid("fps must be at least 1");
        }
        if self.starter_obstacles.is_empty() {
            return invalid("starter_obstacles must name at least one image");
        }
        if self.bullet_width <= 0 || self.bullet_height <= 0 {
            return invalid("bullet dimensions must be positive");
        }
        if self.button_width <= 0 || self.button_height <= 0 {
            return invalid("button dimensions must be positive");
        }
        for (name, speed) in [
            ("ship_speed", self.ship_speed),
            ("bullet_speed", self.bullet_speed),
            ("obstacle_speed", self.obstacle_speed),
            ("game_speed", self.game_speed),
        ] {
            if speed.is_nan() || speed <= 0.0 {
                return Err(GameError::InvalidSettings(format!(
                    "{name} must be positive, got {speed}"
                )));
            }
        }
        for (name, band) in [
            ("obstacle_respawn_offset", self.obstacle_respawn_offset),
            ("obstacle_band", self.obstacle_band),
            ("cloud_respawn_offset", self.cloud_respawn_offset),
            ("cloud_band", self.cloud_band),
        ] {
            if band.low > band.high {
                return Err(GameError::InvalidSettings(format!(
                    "{name}: low {} exceeds high {}",
                    band.low, band.high
                )));
            }
        }
        Ok(())
    }

    /// Milliseconds per tick for the pacer
    pub fn tick_interval_ms(&self) -> u64 {
        (1000 / self.fps.max(1)) as u64
    }

    pub fn center_y(&self) -> i32 {
        self.screen_height / 2
    }
}
