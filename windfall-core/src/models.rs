//! Objects (such as tracked windows) the simulation works with.
mod manager;
mod pointer;
mod screen;
mod vector;
mod window;
mod xyhw;

pub use manager::Manager;
pub use pointer::Pointer;
pub use screen::Screen;
pub use vector::Vector;
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::{Phase, TrackedWindow, WindowHandle};
pub use xyhw::Xyhw;
