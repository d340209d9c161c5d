use super::TickReport;
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Run one full tick: refresh the working set, sample the input, handle dragging, let
    /// the rest fall and commit every move.
    pub fn tick(&mut self) -> TickReport<H> {
        let working = self.registry.refresh(&self.display_server);
        let mut report = TickReport {
            working: working.len(),
            ..TickReport::default()
        };

        match self.display_server.pointer() {
            Ok(pointer) => self.input_handler(&working, pointer, &mut report),
            Err(err) => tracing::warn!("Skipping input for this tick: {}", err),
        }
        self.physics_handler(&working, &mut report);
        self.display_server.flush();

        report.dragging = self.registry.dragging().map(|w| w.handle);
        self.ticks += 1;
        report
    }
}
