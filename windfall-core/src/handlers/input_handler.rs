use super::TickReport;
use crate::config::{Config, HitTest};
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, Phase, Pointer, Vector, WindowHandle};

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Pick up, carry or let go of windows depending on the primary button.
    pub fn input_handler(
        &mut self,
        working: &[WindowHandle<H>],
        pointer: Pointer,
        report: &mut TickReport<H>,
    ) {
        if !pointer.primary_pressed {
            self.registry.release_all();
            return;
        }
        let cursor = pointer.position;
        match self.registry.dragging().map(|w| w.handle) {
            Some(handle) => self.drag_handler(handle, cursor, report),
            None => {
                if let Some(handle) = self.find_drag_target(working, cursor) {
                    if let Some(window) = self.registry.get_mut(handle) {
                        window.start_drag(cursor);
                        tracing::debug!("Dragging {:?} from {:?}", handle, cursor);
                    }
                }
            }
        }
    }

    /// Move the dragged window with the cursor and remember how fast it went, so it keeps
    /// flying once released.
    fn drag_handler(
        &mut self,
        handle: WindowHandle<H>,
        cursor: Vector,
        report: &mut TickReport<H>,
    ) {
        let throw_factor = self.physics.throw_factor;
        let Some(window) = self.registry.get_mut(handle) else {
            return;
        };
        window.velocity = (cursor - window.last_cursor) * throw_factor;
        window.position = cursor - window.drag_offset;
        window.last_cursor = cursor;
        window.phase = Phase::Dragging;
        let xyhw = window.xyhw();
        self.commit(handle, xyhw, report);
    }

    /// Find the tracked window under the cursor, syncing its geometry from the display
    /// server on the way.
    fn find_drag_target(
        &mut self,
        working: &[WindowHandle<H>],
        cursor: Vector,
    ) -> Option<WindowHandle<H>> {
        match self.config.hit_test() {
            HitTest::BoundingBox => working
                .iter()
                .rev()
                .copied()
                .find(|&handle| self.sync_and_contains(handle, cursor)),
            HitTest::Stack => {
                let hit = self.display_server.window_at(cursor)?;
                let top = self.display_server.top_level_ancestor(hit);
                let handle = working.iter().copied().find(|&handle| {
                    handle == top || self.display_server.top_level_ancestor(handle) == top
                })?;
                self.sync_and_contains(handle, cursor).then_some(handle)
            }
        }
    }

    fn sync_and_contains(&mut self, handle: WindowHandle<H>, cursor: Vector) -> bool {
        let Ok(rect) = self.display_server.window_rect(handle) else {
            return false;
        };
        if let Some(window) = self.registry.get_mut(handle) {
            window.sync_geometry(rect);
        }
        rect.contains_point(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::display_servers::{MockDisplayServer, MockWindow};
    use crate::models::{MockHandle, Xyhw};

    type TestManager = Manager<MockHandle, TestConfig, MockDisplayServer>;

    fn manager(hit_test: HitTest) -> TestManager {
        let mut child = MockWindow::new(9, "button", Xyhw::new(120, 120, 10, 10));
        child.parent = Some(2);
        let server = MockDisplayServer::with_windows(vec![
            MockWindow::new(1, "Back", Xyhw::new(0, 0, 400, 400)),
            MockWindow::new(2, "Front", Xyhw::new(100, 100, 200, 150)),
            child,
        ]);
        let config = TestConfig {
            hit_test,
            ..TestConfig::default()
        };
        let mut manager = Manager::new(config, server);
        manager.discover_windows().unwrap();
        manager
    }

    fn press(
        manager: &mut TestManager,
        x: f64,
        y: f64,
        pressed: bool,
    ) -> TickReport<MockHandle> {
        let working = manager.registry.refresh(&manager.display_server);
        let mut report = TickReport::default();
        let pointer = Pointer::new(Vector::new(x, y), pressed);
        manager.input_handler(&working, pointer, &mut report);
        report
    }

    #[test]
    fn bounding_box_picks_the_front_window() {
        let mut manager = manager(HitTest::BoundingBox);
        press(&mut manager, 150.0, 120.0, true);
        let dragging = manager.registry.dragging().unwrap();
        assert_eq!(dragging.handle, WindowHandle(2));
        assert_eq!(dragging.drag_offset, Vector::new(50.0, 20.0));
    }

    #[test]
    fn stack_hit_test_resolves_to_the_top_level_window() {
        let mut manager = manager(HitTest::Stack);
        press(&mut manager, 125.0, 125.0, true);
        assert_eq!(
            manager.registry.dragging().map(|w| w.handle),
            Some(WindowHandle(2))
        );
    }

    #[test]
    fn stack_hit_on_an_untracked_window_drags_nothing() {
        let server = MockDisplayServer::with_windows(vec![
            MockWindow::new(2, "Notepad", Xyhw::new(100, 100, 200, 150)),
            MockWindow::new(1, "Program Manager", Xyhw::new(0, 0, 1920, 1080)),
        ]);
        let config = TestConfig {
            hit_test: HitTest::Stack,
            ..TestConfig::default()
        };
        let mut manager = Manager::new(config, server);
        manager.discover_windows().unwrap();
        assert!(manager.registry.get(WindowHandle(1)).is_none());

        press(&mut manager, 150.0, 120.0, true);
        assert!(manager.registry.dragging().is_none());
        assert!(manager.display_server.moves.is_empty());
    }

    #[test]
    fn stack_hit_outside_the_resynced_rect_drags_nothing() {
        let mut manager = manager(HitTest::Stack);
        manager.display_server.window_mut(9).unwrap().rect = Xyhw::new(500, 500, 10, 10);
        press(&mut manager, 505.0, 505.0, true);
        assert!(manager.registry.dragging().is_none());
        let front = manager.registry.get(WindowHandle(2)).unwrap();
        assert_eq!(front.position, Vector::new(100.0, 100.0));
    }

    #[test]
    fn clicking_empty_space_drags_nothing() {
        for hit_test in [HitTest::BoundingBox, HitTest::Stack] {
            let mut manager = manager(hit_test);
            press(&mut manager, 1000.0, 900.0, true);
            assert!(manager.registry.dragging().is_none());
        }
    }

    #[test]
    fn acquisition_resyncs_geometry_from_the_display_server() {
        let mut manager = manager(HitTest::BoundingBox);
        manager.display_server.window_mut(2).unwrap().rect = Xyhw::new(500, 500, 200, 150);
        press(&mut manager, 550.0, 520.0, true);
        let dragging = manager.registry.dragging().unwrap();
        assert_eq!(dragging.handle, WindowHandle(2));
        assert_eq!(dragging.position, Vector::new(500.0, 500.0));
    }

    #[test]
    fn dragging_follows_the_cursor_and_records_a_throw() {
        let mut manager = manager(HitTest::BoundingBox);
        press(&mut manager, 150.0, 120.0, true);
        let report = press(&mut manager, 170.0, 110.0, true);
        assert_eq!(report.moved, 1);
        let window = manager.registry.get(WindowHandle(2)).unwrap();
        assert_eq!(window.position, Vector::new(120.0, 90.0));
        assert!((window.velocity.x - 14.0).abs() < 1e-9);
        assert!((window.velocity.y + 7.0).abs() < 1e-9);
        assert_eq!(
            manager.display_server.moves.last(),
            Some(&(WindowHandle(2), Xyhw::new(120, 90, 200, 150)))
        );
    }

    #[test]
    fn only_one_window_is_dragged_at_a_time() {
        let mut manager = manager(HitTest::BoundingBox);
        for (x, y) in [(150.0, 120.0), (10.0, 10.0), (390.0, 390.0), (200.0, 200.0)] {
            press(&mut manager, x, y, true);
            let dragging = manager.registry.windows().iter().filter(|w| w.dragging());
            assert_eq!(dragging.count(), 1);
        }
    }

    #[test]
    fn releasing_lets_go_of_everything() {
        let mut manager = manager(HitTest::BoundingBox);
        press(&mut manager, 150.0, 120.0, true);
        press(&mut manager, 150.0, 120.0, false);
        assert!(manager.registry.windows().iter().all(|w| !w.dragging()));
    }
}
