//! Decorations a reparenting window manager draws around a client.
use std::os::raw::c_ulong;

/// The widths of the frame borders, as published in `_NET_FRAME_EXTENTS`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameExtents {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl FrameExtents {
    /// Reads the `left, right, top, bottom` cardinals. Anything shorter means no frame.
    #[must_use]
    pub fn from_longs(values: &[c_ulong]) -> Self {
        match values {
            [left, right, top, bottom, ..] => Self {
                left: clamp(*left),
                right: clamp(*right),
                top: clamp(*top),
                bottom: clamp(*bottom),
            },
            _ => Self::default(),
        }
    }

    /// The frame rectangle around a client rectangle, both as `(x, y, width, height)`.
    #[must_use]
    pub const fn outer(self, (x, y, w, h): (i32, i32, i32, i32)) -> (i32, i32, i32, i32) {
        (
            x - self.left,
            y - self.top,
            w + self.left + self.right,
            h + self.top + self.bottom,
        )
    }

    /// The client request that puts the frame at `outer`.
    ///
    /// With the default north west gravity the window manager places the top left corner of
    /// the frame at the requested position, so only the size loses the decorations.
    #[must_use]
    pub const fn client_request(self, (x, y, w, h): (i32, i32, i32, i32)) -> (i32, i32, i32, i32) {
        (
            x,
            y,
            w - self.left - self.right,
            h - self.top - self.bottom,
        )
    }
}

fn clamp(value: c_ulong) -> i32 {
    i32::try_from(value).unwrap_or(0)
}
