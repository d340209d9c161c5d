//! Core of windfall: desktop windows that fall, bounce and can be thrown.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Window geometry crosses between the integer world of the display server and the
// floating point world of the simulation all the time.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod config;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod registry;

pub use config::{Config, HitTest};
pub use display_servers::DisplayServer;
pub use errors::{Result, WindfallError};
pub use handlers::TickReport;
pub use models::Manager;
pub use models::{Phase, TrackedWindow, WindowHandle};
pub use registry::WindowRegistry;
