use super::{Handle, Screen};
use crate::config::{Config, PhysicsConfig};
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::registry::WindowRegistry;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub config: C,
    pub physics: PhysicsConfig,
    pub screen: Screen,
    pub registry: WindowRegistry<H>,
    pub display_server: SERVER,
    pub ticks: u64,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: C, display_server: SERVER) -> Self {
        let physics = PhysicsConfig::from_config(&config);
        let screen = Screen::from_display(display_server.screen_size(), physics.bottom_margin);
        let registry = WindowRegistry::new(config.ignored_titles(), config.skip_maximized());
        tracing::debug!("Screen bounds: {:?}", screen);
        Self {
            config,
            physics,
            screen,
            registry,
            display_server,
            ticks: 0,
        }
    }

    /// Track every visible window on the screen. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Errors when the display server cannot list its windows.
    pub fn discover_windows(&mut self) -> Result<usize> {
        let before = self.registry.len();
        let found = self.registry.discover(&self.display_server)?;
        let added = self.registry.len() - before;
        tracing::info!("Tracking {} of {} candidate windows", added, found.len());
        Ok(added)
    }

    /// Track only the windows with these titles.
    ///
    /// # Errors
    ///
    /// Errors when the display server cannot list its windows.
    pub fn track_titles(&mut self, titles: &[String]) -> Result<usize> {
        let mut tracked = 0;
        for title in titles {
            if self.registry.add_by_title(&self.display_server, title)? {
                tracked += 1;
            }
        }
        tracing::info!("Tracking {} of {} requested windows", tracked, titles.len());
        Ok(tracked)
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::tests::TestConfig,
        crate::display_servers::MockDisplayServer,
    >
{
    pub fn new_test(display_server: crate::display_servers::MockDisplayServer) -> Self {
        Self::new(crate::config::tests::TestConfig::default(), display_server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_servers::{MockDisplayServer, MockWindow};
    use crate::models::Xyhw;

    #[test]
    fn screen_bounds_leave_room_for_the_taskbar() {
        let manager = Manager::new_test(MockDisplayServer::default());
        assert_eq!(manager.screen, Screen::new(1920, 1050));
    }

    #[test]
    fn tracking_by_title_skips_missing_windows() {
        let server = MockDisplayServer::with_windows(vec![
            MockWindow::new(1, "Notepad", Xyhw::new(0, 0, 100, 100)),
            MockWindow::new(2, "qBittorrent", Xyhw::new(0, 0, 100, 100)),
        ]);
        let mut manager = Manager::new_test(server);
        let titles = vec!["Notepad".to_owned(), "Command Prompt".to_owned()];
        assert_eq!(manager.track_titles(&titles).unwrap(), 1);
    }

    #[test]
    fn discovery_counts_only_new_windows() {
        let server = MockDisplayServer::with_windows(vec![
            MockWindow::new(1, "Program Manager", Xyhw::new(0, 0, 1920, 1080)),
            MockWindow::new(2, "Notepad", Xyhw::new(0, 0, 100, 100)),
        ]);
        let mut manager = Manager::new_test(server);
        assert_eq!(manager.discover_windows().unwrap(), 1);
        assert_eq!(manager.discover_windows().unwrap(), 0);
    }
}
