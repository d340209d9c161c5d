//! Integer window rectangles as the display server reports them.
use super::Vector;
use serde::{Deserialize, Serialize};

/// Window placement and size. x,y from top left.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub h: i32,
    pub w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    /// Whether the point is inside the rectangle. All four edges count as inside.
    #[must_use]
    pub fn contains_point(&self, point: Vector) -> bool {
        let left = f64::from(self.x);
        let top = f64::from(self.y);
        let right = f64::from(self.x + self.w);
        let bottom = f64::from(self.y + self.h);
        (left <= point.x && point.x <= right) && (top <= point.y && point.y <= bottom)
    }

    #[must_use]
    pub fn origin(&self) -> Vector {
        Vector::from((self.x, self.y))
    }
}
