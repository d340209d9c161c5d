// allow casting types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod frame_extents;
mod xatom;
mod xwrap;

use serde::{Deserialize, Serialize};
pub use frame_extents::FrameExtents;
pub use xwrap::{XWrap, XlibError};

use windfall_core::models::{Handle, Vector, WindowHandle, Xyhw};
use windfall_core::{DisplayServer, WindfallError};

use x11_dl::xlib;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XlibWindowHandle(pub xlib::Window);
impl Handle for XlibWindowHandle {}

impl From<XlibError> for WindfallError {
    fn from(err: XlibError) -> Self {
        match err {
            XlibError::WindowGone(window) => Self::WindowGone(window.to_string()),
            XlibError::RootWindowNotFound => Self::InputUnavailable(err.to_string()),
            err => Self::DisplayServer(err.to_string()),
        }
    }
}

pub struct XlibDisplayServer {
    xw: XWrap,
    root: xlib::Window,
}

impl XlibDisplayServer {
    /// Connect to the X server named by `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// Errors when there is no X server to talk to.
    pub fn new() -> Result<Self, XlibError> {
        let xw = XWrap::new()?;
        let root = xw.get_default_root();
        Ok(Self { xw, root })
    }
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn top_level_windows(
        &self,
    ) -> windfall_core::Result<Vec<(WindowHandle<XlibWindowHandle>, Option<String>)>> {
        let windows = self
            .xw
            .get_client_windows()?
            .into_iter()
            .filter(|&w| w != self.root)
            .map(|w| (WindowHandle(XlibWindowHandle(w)), self.xw.get_window_name(w)))
            .collect();
        Ok(windows)
    }

    fn is_visible(&self, handle: WindowHandle<XlibWindowHandle>) -> bool {
        self.xw
            .get_window_attrs(handle.0 .0)
            .is_ok_and(|attrs| attrs.map_state == xlib::IsViewable)
    }

    fn is_valid(&self, handle: WindowHandle<XlibWindowHandle>) -> bool {
        self.xw.get_window_attrs(handle.0 .0).is_ok()
    }

    fn window_rect(&self, handle: WindowHandle<XlibWindowHandle>) -> windfall_core::Result<Xyhw> {
        let (x, y, w, h) = self.xw.get_window_rect(handle.0 .0)?;
        Ok(Xyhw::new(x, y, w, h))
    }

    fn is_maximized(&self, handle: WindowHandle<XlibWindowHandle>) -> bool {
        let states = self.xw.get_window_states_atoms(handle.0 .0);
        self.xw.atoms.is_maximized(&states)
    }

    fn cursor_position(&self) -> windfall_core::Result<Vector> {
        let (x, y, _) = self.xw.get_pointer_state()?;
        Ok(Vector::from((x, y)))
    }

    fn primary_button_pressed(&self) -> windfall_core::Result<bool> {
        let (_, _, mask) = self.xw.get_pointer_state()?;
        Ok(mask & xlib::Button1Mask != 0)
    }

    // One round trip for both halves of the sample.
    fn pointer(&self) -> windfall_core::Result<windfall_core::models::Pointer> {
        let (x, y, mask) = self.xw.get_pointer_state()?;
        Ok(windfall_core::models::Pointer::new(
            Vector::from((x, y)),
            mask & xlib::Button1Mask != 0,
        ))
    }

    fn window_at(&self, point: Vector) -> Option<WindowHandle<XlibWindowHandle>> {
        let x = point.x.round() as i32;
        let y = point.y.round() as i32;
        self.xw
            .get_window_at(x, y)
            .map(|w| WindowHandle(XlibWindowHandle(w)))
    }

    fn top_level_ancestor(
        &self,
        handle: WindowHandle<XlibWindowHandle>,
    ) -> WindowHandle<XlibWindowHandle> {
        WindowHandle(XlibWindowHandle(self.xw.get_top_level(handle.0 .0)))
    }

    fn move_window(
        &mut self,
        handle: WindowHandle<XlibWindowHandle>,
        xyhw: Xyhw,
    ) -> windfall_core::Result<()> {
        self.xw
            .move_resize_window(handle.0 .0, xyhw.x, xyhw.y, xyhw.w, xyhw.h)?;
        Ok(())
    }

    fn screen_size(&self) -> (i32, i32) {
        self.xw.get_screen_size()
    }

    fn flush(&self) {
        self.xw.flush();
    }
}
