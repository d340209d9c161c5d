//! `windfall` general configuration

mod checks;

pub use checks::ConfigIssue;

use crate::utils::file_handler::load_config_file;
use serde::{Deserialize, Serialize};
use windfall_core::config::PhysicsConfig;
use windfall_core::HitTest;

/// Titles of shell, desktop and panel windows. Moving them around breaks the desktop.
const SHELL_TITLES: &[&str] = &[
    "Program Manager",
    "Desktop",
    "desktop_window",
    "plasmashell",
    "Plasma",
    "xfdesktop",
    "xfce4-panel",
    "gnome-shell",
    "Polybar",
    "tint2",
    "lemonbar",
    "Conky",
];

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub gravity: f64,
    pub bounce: f64,
    pub friction: f64,
    pub throw_factor: f64,
    pub bottom_margin: i32,
    pub tick_rate: f64,
    pub hit_test: HitTest,
    pub skip_maximized: bool,
    pub ignored_titles: Vec<String>,
    /// Only these windows are animated when set.
    pub titles: Option<Vec<String>>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let physics = PhysicsConfig::default();
        Self {
            gravity: physics.gravity,
            bounce: physics.bounce,
            friction: physics.friction,
            throw_factor: physics.throw_factor,
            bottom_margin: physics.bottom_margin,
            tick_rate: physics.tick_rate,
            hit_test: HitTest::default(),
            skip_maximized: false,
            ignored_titles: SHELL_TITLES.iter().map(|&t| t.to_owned()).collect(),
            titles: None,
            log_level: "info".to_owned(),
        }
    }
}

/// Values given on the command line, they win over the configuration file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub hit_test: Option<HitTest>,
    pub skip_maximized: bool,
    pub tick_rate: Option<f64>,
    pub titles: Vec<String>,
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(hit_test) = overrides.hit_test {
            self.hit_test = hit_test;
        }
        if overrides.skip_maximized {
            self.skip_maximized = true;
        }
        if let Some(tick_rate) = overrides.tick_rate {
            self.tick_rate = tick_rate;
        }
        if !overrides.titles.is_empty() {
            self.titles = Some(overrides.titles);
        }
    }

    /// The windows to track instead of discovering every window on the screen.
    #[must_use]
    pub fn tracked_titles(&self) -> Option<&[String]> {
        self.titles.as_deref().filter(|titles| !titles.is_empty())
    }
}

/// Parse the name of a hit test mode as written on the command line.
#[must_use]
pub fn parse_hit_test(value: &str) -> Option<HitTest> {
    match value.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
        "stack" => Some(HitTest::Stack),
        "boundingbox" | "bbox" => Some(HitTest::BoundingBox),
        _ => None,
    }
}

/// Load the default configuration file, or the defaults when it cannot be read.
#[must_use]
pub fn load() -> Config {
    load_config_file(None)
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

impl windfall_core::Config for Config {
    fn gravity(&self) -> f64 {
        self.gravity
    }

    fn bounce(&self) -> f64 {
        self.bounce
    }

    fn friction(&self) -> f64 {
        self.friction
    }

    fn throw_factor(&self) -> f64 {
        self.throw_factor
    }

    fn bottom_margin(&self) -> i32 {
        self.bottom_margin
    }

    fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    fn hit_test(&self) -> HitTest {
        self.hit_test
    }

    fn skip_maximized(&self) -> bool {
        self.skip_maximized
    }

    fn ignored_titles(&self) -> Vec<String> {
        self.ignored_titles.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_physics_defaults() {
        let config = Config::default();
        assert_eq!(
            PhysicsConfig::from_config(&config),
            PhysicsConfig::default()
        );
        assert_eq!(config.hit_test, HitTest::BoundingBox);
        assert!(!config.skip_maximized);
        assert!(config.ignored_titles.iter().any(|t| t == "Program Manager"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn command_line_wins_over_the_file() {
        let mut config = Config::default();
        config.apply_overrides(Overrides {
            hit_test: Some(HitTest::Stack),
            skip_maximized: true,
            tick_rate: Some(30.0),
            titles: vec!["Notepad".to_owned()],
        });
        assert_eq!(config.hit_test, HitTest::Stack);
        assert!(config.skip_maximized);
        assert!((config.tick_rate - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.tracked_titles(), Some(&["Notepad".to_owned()][..]));
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = Config {
            skip_maximized: true,
            titles: Some(vec!["Terminal".to_owned()]),
            ..Config::default()
        };
        let before = config.clone();
        config.apply_overrides(Overrides::default());
        assert_eq!(config, before);
    }

    #[test]
    fn empty_title_list_means_discovery() {
        let config = Config {
            titles: Some(vec![]),
            ..Config::default()
        };
        assert_eq!(config.tracked_titles(), None);
    }

    #[test]
    fn hit_test_names() {
        assert_eq!(parse_hit_test("stack"), Some(HitTest::Stack));
        assert_eq!(parse_hit_test("bounding-box"), Some(HitTest::BoundingBox));
        assert_eq!(parse_hit_test("BoundingBox"), Some(HitTest::BoundingBox));
        assert_eq!(parse_hit_test("z-order"), None);
    }
}
