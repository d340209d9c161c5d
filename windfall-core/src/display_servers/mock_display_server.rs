use super::DisplayServer;
use crate::errors::{Result, WindfallError};
use crate::models::{MockHandle, Pointer, Vector, WindowHandle, Xyhw};

#[derive(Debug, Clone)]
pub struct MockWindow {
    pub handle: MockHandle,
    pub title: Option<String>,
    pub rect: Xyhw,
    pub visible: bool,
    pub valid: bool,
    pub maximized: bool,
    /// Set for windows nested inside another window.
    pub parent: Option<MockHandle>,
}

impl MockWindow {
    pub fn new(handle: MockHandle, title: &str, rect: Xyhw) -> Self {
        Self {
            handle,
            title: Some(title.to_owned()),
            rect,
            visible: true,
            valid: true,
            maximized: false,
            parent: None,
        }
    }
}

/// A scripted display server. Windows are stacked bottom to top in the order they are
/// pushed; tests drive the cursor by writing `pointer` between ticks.
#[derive(Debug, Clone)]
pub struct MockDisplayServer {
    pub windows: Vec<MockWindow>,
    pub pointer: Pointer,
    pub input_broken: bool,
    pub screen: (i32, i32),
    pub failing_moves: Vec<MockHandle>,
    pub moves: Vec<(WindowHandle<MockHandle>, Xyhw)>,
}

impl Default for MockDisplayServer {
    fn default() -> Self {
        Self {
            windows: vec![],
            pointer: Pointer::default(),
            input_broken: false,
            screen: (1920, 1080),
            failing_moves: vec![],
            moves: vec![],
        }
    }
}

impl MockDisplayServer {
    pub fn with_windows(windows: Vec<MockWindow>) -> Self {
        Self {
            windows,
            ..Self::default()
        }
    }

    pub fn window(&self, handle: MockHandle) -> Option<&MockWindow> {
        self.windows.iter().find(|w| w.handle == handle)
    }

    pub fn window_mut(&mut self, handle: MockHandle) -> Option<&mut MockWindow> {
        self.windows.iter_mut().find(|w| w.handle == handle)
    }

    fn live(&self, handle: MockHandle) -> Option<&MockWindow> {
        self.window(handle).filter(|w| w.valid)
    }
}

impl DisplayServer<MockHandle> for MockDisplayServer {
    fn top_level_windows(&self) -> Result<Vec<(WindowHandle<MockHandle>, Option<String>)>> {
        Ok(self
            .windows
            .iter()
            .filter(|w| w.valid && w.parent.is_none())
            .map(|w| (WindowHandle(w.handle), w.title.clone()))
            .collect())
    }

    fn is_visible(&self, handle: WindowHandle<MockHandle>) -> bool {
        self.live(handle.0).is_some_and(|w| w.visible)
    }

    fn is_valid(&self, handle: WindowHandle<MockHandle>) -> bool {
        self.live(handle.0).is_some()
    }

    fn window_rect(&self, handle: WindowHandle<MockHandle>) -> Result<Xyhw> {
        self.live(handle.0)
            .map(|w| w.rect)
            .ok_or_else(|| WindfallError::WindowGone(format!("{handle:?}")))
    }

    fn is_maximized(&self, handle: WindowHandle<MockHandle>) -> bool {
        self.live(handle.0).is_some_and(|w| w.maximized)
    }

    fn cursor_position(&self) -> Result<Vector> {
        if self.input_broken {
            return Err(WindfallError::InputUnavailable("mock input".to_owned()));
        }
        Ok(self.pointer.position)
    }

    fn primary_button_pressed(&self) -> Result<bool> {
        if self.input_broken {
            return Err(WindfallError::InputUnavailable("mock input".to_owned()));
        }
        Ok(self.pointer.primary_pressed)
    }

    fn window_at(&self, point: Vector) -> Option<WindowHandle<MockHandle>> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.valid && w.visible && w.rect.contains_point(point))
            .map(|w| WindowHandle(w.handle))
    }

    fn top_level_ancestor(&self, handle: WindowHandle<MockHandle>) -> WindowHandle<MockHandle> {
        let mut current = handle.0;
        while let Some(parent) = self.window(current).and_then(|w| w.parent) {
            current = parent;
        }
        WindowHandle(current)
    }

    fn move_window(&mut self, handle: WindowHandle<MockHandle>, xyhw: Xyhw) -> Result<()> {
        if self.failing_moves.contains(&handle.0) {
            return Err(WindfallError::DisplayServer(format!(
                "move of {handle:?} refused"
            )));
        }
        let window = self
            .window_mut(handle.0)
            .filter(|w| w.valid)
            .ok_or_else(|| WindfallError::WindowGone(format!("{handle:?}")))?;
        window.rect = xyhw;
        self.moves.push((handle, xyhw));
        Ok(())
    }

    fn screen_size(&self) -> (i32, i32) {
        self.screen
    }
}
