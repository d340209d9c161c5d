use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the window under the cursor is found when a drag starts.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HitTest {
    /// Ask the display server for the topmost window at the cursor and resolve it to its
    /// top-level ancestor.
    Stack,
    /// Walk the tracked windows front to back and pick the first whose box holds the cursor.
    #[default]
    BoundingBox,
}

pub trait Config {
    /// Downward acceleration in pixels per tick squared.
    fn gravity(&self) -> f64;

    /// Share of the velocity kept (and reversed) when a window hits a screen edge.
    fn bounce(&self) -> f64;

    /// Multiplier applied to the velocity every tick.
    fn friction(&self) -> f64;

    /// Share of the last cursor movement a dragged window keeps when it is let go.
    fn throw_factor(&self) -> f64;

    /// Pixels cut from the bottom of the screen, usually for a panel or taskbar.
    fn bottom_margin(&self) -> i32;

    /// Ticks per second.
    fn tick_rate(&self) -> f64;

    fn hit_test(&self) -> HitTest;

    /// Drop maximized windows from the simulation instead of moving them.
    fn skip_maximized(&self) -> bool;

    /// Titles of windows which must never be picked up by discovery.
    fn ignored_titles(&self) -> Vec<String>;
}

/// The numbers driving the simulation, captured once when the manager is built.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub bounce: f64,
    pub friction: f64,
    pub throw_factor: f64,
    pub bottom_margin: i32,
    pub tick_rate: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            bounce: 0.65,
            friction: 0.96,
            throw_factor: 0.7,
            bottom_margin: 30,
            tick_rate: 60.0,
        }
    }
}

impl PhysicsConfig {
    pub fn from_config(config: &impl Config) -> Self {
        Self {
            gravity: config.gravity(),
            bounce: config.bounce(),
            friction: config.friction(),
            throw_factor: config.throw_factor(),
            bottom_margin: config.bottom_margin(),
            tick_rate: config.tick_rate(),
        }
    }

    /// Time slept between two ticks. Falls back to 60Hz for rates which are not positive.
    pub fn tick_interval(&self) -> Duration {
        if self.tick_rate.is_finite() && self.tick_rate > 0.0 {
            Duration::from_secs_f64(1.0 / self.tick_rate)
        } else {
            Duration::from_secs_f64(1.0 / 60.0)
        }
    }
}
