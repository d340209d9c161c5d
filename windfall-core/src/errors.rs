use thiserror::Error;

pub type Result<T> = std::result::Result<T, WindfallError>;

#[derive(Debug, Error)]
pub enum WindfallError {
    #[error("Window is gone: {0}")]
    WindowGone(String),
    #[error("Unable to read input state: {0}")]
    InputUnavailable(String),
    #[error("Display server error: {0}")]
    DisplayServer(String),
}
