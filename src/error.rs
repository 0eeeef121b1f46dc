use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("circle width and height must match (w: {width}, h: {height})")]
    UnequalCircleSize { width: f64, height: f64 },

    #[error("unsupported button behaviour {0}")]
    UnsupportedBehaviour(u8),

    #[cfg(feature = "window")]
    #[error("failed to {action}: {message}")]
    Sdl {
        action: &'static str,
        message: String,
    },
}
