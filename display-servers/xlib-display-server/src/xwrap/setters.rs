//! `XWrap` setters.
use super::XlibError;
use crate::XWrap;
use std::os::raw::c_uint;
use x11_dl::xlib;

impl XWrap {
    /// Moves and resizes a window in one request. The rect is the outer one, as returned by
    /// `get_window_rect`, and the frame drawn by the window manager is taken off the size.
    /// Zero sized windows are refused by X, so the size is at least one pixel.
    /// # Errors
    ///
    /// Errors when the window is gone.
    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(
        &self,
        window: xlib::Window,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Result<(), XlibError> {
        self.get_window_attrs(window)?;
        let (x, y, w, h) = self.get_frame_extents(window).client_request((x, y, w, h));
        let width = c_uint::try_from(w.max(1)).unwrap_or(1);
        let height = c_uint::try_from(h.max(1)).unwrap_or(1);
        unsafe { (self.xlib.XMoveResizeWindow)(self.display, window, x, y, width, height) };
        Ok(())
    }
}
