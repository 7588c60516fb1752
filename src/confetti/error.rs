use std::fmt;

/// Error types for launching and running a confetti burst
#[derive(Debug, Clone, PartialEq)]
pub enum ConfettiError {
    /// An option is out of range or malformed
    InvalidOptions(String),
    /// The mount target is detached or otherwise cannot take a canvas
    TargetUnavailable,
    /// No drawing surface could be created for the canvas
    SurfaceUnavailable,
    /// Drawing a frame failed
    Draw(String),
}

impl fmt::Display for ConfettiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfettiError::InvalidOptions(msg) => write!(f, "Invalid confetti options: {}", msg),
            ConfettiError::TargetUnavailable => write!(f, "Confetti mount target is unavailable"),
            ConfettiError::SurfaceUnavailable => {
                write!(f, "Confetti drawing surface is unavailable")
            }
            ConfettiError::Draw(msg) => write!(f, "Confetti frame failed to draw: {}", msg),
        }
    }
}

impl std::error::Error for ConfettiError {}
