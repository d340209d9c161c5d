use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::{Result, WindfallError};
use crate::models::{Handle, Manager};

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Tick at the configured rate until interrupted, or until `max_ticks` ticks ran.
    ///
    /// The loop sleeps a fixed interval after every tick. Slow ticks are not caught up.
    ///
    /// # Errors
    ///
    /// Errors when the input state cannot be read before the first tick.
    pub async fn start_event_loop(&mut self, max_ticks: Option<u64>) -> Result<()> {
        match self.display_server.pointer() {
            Ok(pointer) => tracing::debug!("Initial pointer state: {:?}", pointer),
            Err(WindfallError::InputUnavailable(msg)) => {
                return Err(WindfallError::InputUnavailable(msg))
            }
            Err(err) => return Err(WindfallError::InputUnavailable(err.to_string())),
        }

        let interval = self.physics.tick_interval();
        tracing::info!(
            "Simulating {} windows every {:?}",
            self.registry.len(),
            interval
        );

        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);

        loop {
            if max_ticks.is_some_and(|max| self.ticks >= max) {
                tracing::info!("Stopping after {} ticks", self.ticks);
                break;
            }

            let report = self.tick();
            tracing::trace!("Tick {}: {:?}", self.ticks, report);

            tokio::select! {
                () = tokio::time::sleep(interval) => {}
                result = &mut interrupt => {
                    if let Err(err) = result {
                        tracing::warn!("Unable to listen for interrupts: {}", err);
                    }
                    tracing::info!("Interrupted, stopping");
                    break;
                }
            }
        }
        Ok(())
    }
}
