mod input_handler;
mod physics_handler;
mod tick_handler;

use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, WindowHandle, Xyhw};
use crate::Config;

/// What a single tick did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport<H: Handle> {
    /// Windows in this tick's working set.
    pub working: usize,
    /// The window following the cursor when the tick ended.
    pub dragging: Option<WindowHandle<H>>,
    pub moved: usize,
    pub failed_moves: usize,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Send a window's new geometry to the display server. A failed move is not fatal, the
    /// next tick tries again.
    fn commit(&mut self, handle: WindowHandle<H>, xyhw: Xyhw, report: &mut TickReport<H>) {
        match self.display_server.move_window(handle, xyhw) {
            Ok(()) => report.moved += 1,
            Err(err) => {
                tracing::warn!("Move error for {:?}: {}", handle, err);
                report.failed_moves += 1;
            }
        }
    }
}
