//! Game configuration.
//!
//! Defaults come from `clife-types`; every field except the padding can be
//! overridden from the environment. Unparsable or out-of-range values fall
//! back to the default.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::Padding;
use crate::types::{
    BASE_FRAME_MS, DEFAULT_SIZE_SLACK, INPUT_COOLDOWN_MS, MAX_SPEED_TENTHS, SPEED_STEP_TENTHS,
};

/// Largest accepted `CLIFE_FRAME_MS` (one minute per generation at 1x).
pub const MAX_FRAME_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Frame interval at speed 1x.
    pub base_frame_ms: u64,
    /// Speed increment, in tenths.
    pub speed_step: u16,
    /// Speed ceiling, in tenths.
    pub max_speed: u16,
    pub input_cooldown: Duration,
    pub padding: Padding,
    pub size_slack: u16,
    pub presets_dir: PathBuf,
    pub preferences_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_frame_ms: BASE_FRAME_MS,
            speed_step: SPEED_STEP_TENTHS,
            max_speed: MAX_SPEED_TENTHS,
            input_cooldown: Duration::from_millis(INPUT_COOLDOWN_MS),
            padding: Padding::default(),
            size_slack: DEFAULT_SIZE_SLACK,
            presets_dir: PathBuf::from("presets"),
            preferences_path: PathBuf::from("preferences.json"),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from `CLIFE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();

        let number = |key: &str| -> Option<u64> {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
        };
        let tenths = |key: &str| -> Option<u16> {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|v| *v > 0)
        };
        let path = |key: &str| -> Option<PathBuf> {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        let speed_step = tenths("CLIFE_SPEED_STEP").unwrap_or(d.speed_step);
        let max_speed = tenths("CLIFE_MAX_SPEED")
            .unwrap_or(d.max_speed)
            .max(speed_step);

        Self {
            base_frame_ms: number("CLIFE_FRAME_MS")
                .filter(|ms| *ms <= MAX_FRAME_MS)
                .unwrap_or(d.base_frame_ms),
            speed_step,
            max_speed,
            input_cooldown: number("CLIFE_INPUT_COOLDOWN_MS")
                .map(Duration::from_millis)
                .unwrap_or(d.input_cooldown),
            padding: d.padding,
            size_slack: lookup("CLIFE_SIZE_SLACK")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(d.size_slack),
            presets_dir: path("CLIFE_PRESETS_DIR").unwrap_or(d.presets_dir),
            preferences_path: path("CLIFE_PREFERENCES").unwrap_or(d.preferences_path),
            log_path: path("CLIFE_LOG_PATH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let cfg = GameConfig::from_lookup(|_| None);
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn test_frame_time_out_of_range_falls_back() {
        let huge = (u64::MAX / 5).to_string();
        let cfg = GameConfig::from_lookup(lookup(&[("CLIFE_FRAME_MS", huge.as_str())]));
        assert_eq!(cfg.base_frame_ms, BASE_FRAME_MS);

        let cfg = GameConfig::from_lookup(lookup(&[("CLIFE_FRAME_MS", "60001")]));
        assert_eq!(cfg.base_frame_ms, BASE_FRAME_MS);

        let cfg = GameConfig::from_lookup(lookup(&[("CLIFE_FRAME_MS", "60000")]));
        assert_eq!(cfg.base_frame_ms, MAX_FRAME_MS);
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("CLIFE_FRAME_MS", "200"),
            ("CLIFE_SPEED_STEP", "abc"),
            ("CLIFE_INPUT_COOLDOWN_MS", "0"),
            ("CLIFE_PRESETS_DIR", " /tmp/presets "),
            ("CLIFE_LOG_PATH", "  "),
        ]));
        assert_eq!(cfg.base_frame_ms, 200);
        assert_eq!(cfg.speed_step, SPEED_STEP_TENTHS);
        assert_eq!(cfg.input_cooldown, Duration::from_millis(INPUT_COOLDOWN_MS));
        assert_eq!(cfg.presets_dir, PathBuf::from("/tmp/presets"));
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn test_max_speed_never_below_step() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("CLIFE_SPEED_STEP", "20"),
            ("CLIFE_MAX_SPEED", "10"),
        ]));
        assert_eq!(cfg.max_speed, 20);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
