use crate::errors::Result;
use crate::models::{Handle, Pointer, Vector, WindowHandle, Xyhw};

#[cfg(test)]
mod mock_display_server;

#[cfg(test)]
pub use self::mock_display_server::{MockDisplayServer, MockWindow};

/// Everything the simulation needs from the windowing system.
pub trait DisplayServer<H: Handle> {
    /// All top-level windows with their titles, ordered bottom to top.
    ///
    /// # Errors
    ///
    /// Errors when the display server refuses to list its windows.
    fn top_level_windows(&self) -> Result<Vec<(WindowHandle<H>, Option<String>)>>;

    fn is_visible(&self, handle: WindowHandle<H>) -> bool;

    /// Whether the handle still refers to a live window.
    fn is_valid(&self, handle: WindowHandle<H>) -> bool;

    /// The window's rectangle in screen coordinates.
    ///
    /// # Errors
    ///
    /// Errors when the window no longer exists.
    fn window_rect(&self, handle: WindowHandle<H>) -> Result<Xyhw>;

    fn is_maximized(&self, handle: WindowHandle<H>) -> bool;

    /// # Errors
    ///
    /// Errors when the input state cannot be read.
    fn cursor_position(&self) -> Result<Vector>;

    /// # Errors
    ///
    /// Errors when the input state cannot be read.
    fn primary_button_pressed(&self) -> Result<bool>;

    /// Cursor position and primary button state in one sample.
    ///
    /// # Errors
    ///
    /// Errors when the input state cannot be read.
    fn pointer(&self) -> Result<Pointer> {
        Ok(Pointer::new(
            self.cursor_position()?,
            self.primary_button_pressed()?,
        ))
    }

    /// The topmost window at a point, if any.
    fn window_at(&self, point: Vector) -> Option<WindowHandle<H>>;

    /// The top-level window a (possibly nested) window belongs to.
    fn top_level_ancestor(&self, handle: WindowHandle<H>) -> WindowHandle<H>;

    /// Place a window. The size is passed along unchanged.
    ///
    /// # Errors
    ///
    /// Errors when the window could not be moved.
    fn move_window(&mut self, handle: WindowHandle<H>, xyhw: Xyhw) -> Result<()>;

    /// Width and height of the primary screen.
    fn screen_size(&self) -> (i32, i32);

    fn flush(&self) {}
}
