use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::renderer::traits::Color;

/// Configuration for the background, provided by the host.
/// Every field is optional in JSON; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Stars per batch (default: 150).
    pub star_count: usize,
    /// Min/max star radius in pixels.
    pub star_radius: (f64, f64),
    /// Min/max per-star opacity.
    pub star_alpha: (f64, f64),
    pub star_color: Color,
    /// Cap on simultaneously active meteors (default: 8).
    pub max_meteors: usize,
    /// Minimum time between meteor spawns in milliseconds (default: 2000).
    pub spawn_interval_ms: f64,
    /// Min/max trail length in pixels.
    pub meteor_length: (f64, f64),
    /// Min/max stroke width in pixels.
    pub meteor_width: (f64, f64),
    /// Min/max speed in pixels per frame.
    pub meteor_speed: (f64, f64),
    /// Mean travel angle in radians (0 = right, PI/2 = down).
    pub meteor_angle: f64,
    /// Full width of the angle jitter, centered on `meteor_angle`.
    pub meteor_angle_spread: f64,
    /// Spawn height; negative values start meteors above the top edge.
    pub meteor_spawn_y: f64,
    /// Alpha lost per frame (default: 0.006).
    pub fade_speed: f64,
    pub meteor_color: Color,
    /// Shadow blur radius giving meteors their glow.
    pub glow_blur: f64,
    pub glow_color: Color,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            star_count: 150,
            star_radius: (0.3, 1.5),
            star_alpha: (0.3, 1.0),
            star_color: Color::WHITE,
            max_meteors: 8,
            spawn_interval_ms: 2000.0,
            meteor_length: (20.0, 80.0),
            meteor_width: (1.5, 3.5),
            meteor_speed: (2.0, 4.0),
            meteor_angle: PI / 4.0,
            meteor_angle_spread: PI / 8.0,
            meteor_spawn_y: -50.0,
            fade_speed: 0.006,
            meteor_color: Color::WHITE,
            glow_blur: 10.0,
            glow_color: Color::rgba(255, 255, 255, 0.8),
        }
    }
}

impl BackgroundConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = BackgroundConfig::from_json("{}").unwrap();
        assert_eq!(config, BackgroundConfig::default());
    }

    #[test]
    fn overrides_selected_fields() {
        let json = r#"{
            "star_count": 40,
            "max_meteors": 3,
            "meteor_speed": [5.0, 6.0],
            "glow_color": { "r": 200, "g": 220, "b": 255, "a": 0.5 }
        }"#;
        let config = BackgroundConfig::from_json(json).unwrap();
        assert_eq!(config.star_count, 40);
        assert_eq!(config.max_meteors, 3);
        assert_eq!(config.meteor_speed, (5.0, 6.0));
        assert_eq!(config.glow_color, Color::rgba(200, 220, 255, 0.5));
        // untouched
        assert_eq!(config.spawn_interval_ms, 2000.0);
        assert_eq!(config.fade_speed, 0.006);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(BackgroundConfig::from_json("{ star_count: }").is_err());
        assert!(BackgroundConfig::from_json(r#"{ "star_count": "many" }"#).is_err());
    }

    #[test]
    fn default_angle_is_forty_five_degrees_with_quarter_spread() {
        let config = BackgroundConfig::default();
        assert!((config.meteor_angle.to_degrees() - 45.0).abs() < 1e-9);
        assert!((config.meteor_angle_spread.to_degrees() - 22.5).abs() < 1e-9);
    }
}
