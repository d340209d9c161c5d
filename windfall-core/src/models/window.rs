//! Tracked window information.
use super::{Vector, Xyhw};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it. The display server owns the
/// window, this is only a reference to it.
///
/// Generics and serde derives need `#[serde(bound = "")]` wherever the generic shows up,
/// see <https://github.com/serde-rs/serde/issues/1296>.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
#[cfg(test)]
pub type MockHandle = i32;
#[cfg(test)]
impl Handle for MockHandle {}

/// What the last tick did with a window.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not stepped yet.
    #[default]
    Idle,
    /// Following the cursor.
    Dragging,
    /// Integrated by gravity.
    Falling,
}

/// A window taking part in the simulation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackedWindow<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub title: Option<String>,
    pub position: Vector,
    pub width: i32,
    pub height: i32,
    pub velocity: Vector,
    dragging: bool,
    pub drag_offset: Vector,
    pub last_cursor: Vector,
    pub phase: Phase,
}

impl<H: Handle> TrackedWindow<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>, title: Option<String>, rect: Xyhw) -> Self {
        Self {
            handle,
            title,
            position: rect.origin(),
            width: rect.w,
            height: rect.h,
            velocity: Vector::ZERO,
            dragging: false,
            drag_offset: Vector::ZERO,
            last_cursor: Vector::ZERO,
            phase: Phase::Idle,
        }
    }

    /// Replace the geometry with what the display server just reported.
    pub fn sync_geometry(&mut self, rect: Xyhw) {
        self.position = rect.origin();
        self.width = rect.w;
        self.height = rect.h;
    }

    #[must_use]
    pub const fn dragging(&self) -> bool {
        self.dragging
    }

    /// Attach the window to the cursor, keeping the grab point fixed.
    pub fn start_drag(&mut self, cursor: Vector) {
        self.dragging = true;
        self.drag_offset = cursor - self.position;
        self.last_cursor = cursor;
        self.phase = Phase::Dragging;
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    /// The geometry to hand to the display server, rounded to whole pixels.
    #[must_use]
    pub fn xyhw(&self) -> Xyhw {
        Xyhw::new(
            self.position.x.round() as i32,
            self.position.y.round() as i32,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_offset_is_relative_to_the_origin() {
        let mut window = TrackedWindow::new(
            WindowHandle::<MockHandle>(1),
            None,
            Xyhw::new(100, 100, 200, 150),
        );
        window.start_drag(Vector::new(150.0, 120.0));
        assert!(window.dragging());
        assert_eq!(window.drag_offset, Vector::new(50.0, 20.0));
        assert_eq!(window.last_cursor, Vector::new(150.0, 120.0));
        window.stop_drag();
        assert!(!window.dragging());
    }

    #[test]
    fn committed_geometry_is_rounded() {
        let mut window =
            TrackedWindow::new(WindowHandle::<MockHandle>(1), None, Xyhw::new(0, 0, 20, 10));
        window.position = Vector::new(10.4, 99.6);
        assert_eq!(window.xyhw(), Xyhw::new(10, 100, 20, 10));
    }
}
