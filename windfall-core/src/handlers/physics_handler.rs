use super::TickReport;
use crate::config::{Config, PhysicsConfig};
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, Phase, Screen, TrackedWindow, Vector, WindowHandle};

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Let every window of the working set which is not being dragged fall for one tick.
    pub fn physics_handler(&mut self, working: &[WindowHandle<H>], report: &mut TickReport<H>) {
        for &handle in working {
            let Some(window) = self.registry.get_mut(handle) else {
                continue;
            };
            if window.dragging() {
                continue;
            }
            step(window, &self.physics, self.screen);
            let xyhw = window.xyhw();
            self.commit(handle, xyhw, report);
        }
    }
}

/// One semi-implicit Euler step: gravity feeds the velocity, the velocity moves the window,
/// screen edges reflect it and friction slows it down.
pub(crate) fn step<H: Handle>(
    window: &mut TrackedWindow<H>,
    physics: &PhysicsConfig,
    screen: Screen,
) {
    let mut velocity = window.velocity;
    velocity.y += physics.gravity;
    let next = window.position + velocity;

    let (x, vx) = collide(
        next.x,
        velocity.x,
        window.width,
        screen.width,
        physics.bounce,
    );
    let (y, vy) = collide(
        next.y,
        velocity.y,
        window.height,
        screen.height,
        physics.bounce,
    );

    window.velocity = Vector::new(vx, vy) * physics.friction;
    window.position = Vector::new(x, y);
    window.phase = Phase::Falling;
}

// Returns the clamped position and the velocity along one axis.
fn collide(position: f64, velocity: f64, size: i32, bound: i32, bounce: f64) -> (f64, f64) {
    let size = f64::from(size);
    let bound = f64::from(bound);
    if position < 0.0 || position + size > bound {
        let clamped = position.min(bound - size).max(0.0);
        (clamped, -velocity * bounce)
    } else {
        (position, velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_servers::{MockDisplayServer, MockWindow};
    use crate::models::{MockHandle, Xyhw};

    const EPS: f64 = 1e-9;

    fn window(x: i32, y: i32, w: i32, h: i32) -> TrackedWindow<MockHandle> {
        TrackedWindow::new(WindowHandle(1), None, Xyhw::new(x, y, w, h))
    }

    fn screen() -> Screen {
        Screen::new(1920, 1050)
    }

    #[test]
    fn one_tick_of_free_fall() {
        let mut w = window(100, 100, 200, 150);
        step(&mut w, &PhysicsConfig::default(), screen());
        assert!((w.velocity.x).abs() < EPS);
        assert!((w.velocity.y - 0.768).abs() < EPS);
        assert!((w.position.x - 100.0).abs() < EPS);
        assert!((w.position.y - 100.8).abs() < EPS);
        assert_eq!(w.phase, Phase::Falling);
    }

    #[test]
    fn horizontal_motion_is_only_slowed_by_friction() {
        let mut w = window(100, 100, 200, 150);
        w.velocity = Vector::new(10.0, 0.0);
        step(&mut w, &PhysicsConfig::default(), screen());
        assert!((w.position.x - 110.0).abs() < EPS);
        assert!((w.velocity.x - 9.6).abs() < EPS);
    }

    #[test]
    fn floor_bounce_flips_and_damps_the_velocity() {
        let screen = screen();
        let mut w = window(100, screen.height - 150 - 1, 200, 150);
        w.velocity = Vector::new(0.0, 10.0);
        step(&mut w, &PhysicsConfig::default(), screen);
        assert!((w.position.y - f64::from(screen.height - 150)).abs() < EPS);
        assert!(w.velocity.y < 0.0);
        assert!((w.velocity.y - (-10.8 * 0.65 * 0.96)).abs() < EPS);
    }

    #[test]
    fn walls_and_ceiling_bounce_too() {
        let mut w = window(5, 5, 200, 150);
        w.velocity = Vector::new(-20.0, -30.0);
        step(&mut w, &PhysicsConfig::default(), screen());
        assert!(w.position.x.abs() < EPS);
        assert!(w.position.y.abs() < EPS);
        assert!((w.velocity.x - 20.0 * 0.65 * 0.96).abs() < EPS);
        assert!((w.velocity.y - 29.2 * 0.65 * 0.96).abs() < EPS);

        let mut w = window(1900, 100, 200, 150);
        w.velocity = Vector::new(5.0, 0.0);
        step(&mut w, &PhysicsConfig::default(), screen());
        assert!((w.position.x - 1720.0).abs() < EPS);
        assert!(w.velocity.x < 0.0);
    }

    #[test]
    fn resting_window_never_leaves_the_floor() {
        let screen = screen();
        let floor = f64::from(screen.height - 150);
        let mut w = window(100, screen.height - 150, 200, 150);
        for _ in 0..1000 {
            step(&mut w, &PhysicsConfig::default(), screen);
            assert!(w.position.y <= floor + EPS);
            assert!(w.position.y >= floor - 1.0);
        }
        assert!((w.position.y - floor).abs() < 1.0);
    }

    #[test]
    fn window_larger_than_the_screen_sticks_to_the_origin() {
        let mut w = window(0, 0, 3000, 150);
        w.velocity = Vector::new(3.0, 0.0);
        step(&mut w, &PhysicsConfig::default(), screen());
        assert!(w.position.x.abs() < EPS);
    }

    #[test]
    fn falling_windows_are_committed_rounded() {
        let server = MockDisplayServer::with_windows(vec![MockWindow::new(
            1,
            "Notepad",
            Xyhw::new(100, 100, 200, 150),
        )]);
        let mut manager = Manager::new_test(server);
        manager.discover_windows().unwrap();
        let working = manager.registry.refresh(&manager.display_server);
        let mut report = TickReport::default();
        manager.physics_handler(&working, &mut report);
        assert_eq!(report.moved, 1);
        assert_eq!(
            manager.display_server.moves,
            vec![(WindowHandle(1), Xyhw::new(100, 101, 200, 150))]
        );
    }
}
