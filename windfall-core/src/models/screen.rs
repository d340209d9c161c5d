use serde::{Deserialize, Serialize};

/// The rectangle windows bounce inside of: `[0, width] x [0, height]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

impl Screen {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Builds the bounds from the primary screen size, keeping `bottom_margin` pixels free
    /// at the bottom.
    #[must_use]
    pub fn from_display(size: (i32, i32), bottom_margin: i32) -> Self {
        let (width, height) = size;
        Self {
            width: width.max(0),
            height: (height - bottom_margin).max(0),
        }
    }
}
