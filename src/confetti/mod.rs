//! Particle burst animator.
//!
//! [`launch_confetti`] mounts a full-viewport canvas on a [`MountTarget`],
//! steps its particles once per host frame, and removes the canvas and its
//! resize listener when the last particle expires.

mod burst;
mod cannon;
mod error;
mod host;
mod options;
mod overlay;
mod particle;

pub use burst::{BurstId, launch_confetti};
pub use cannon::ConfettiCannon;
pub use error::ConfettiError;
pub use host::{
    CanvasId, CanvasSpec, FrameCallback, FrameQueue, FrameScheduler, ListenerId, MountTarget,
    ResizeListener, Rgba, Sprite, Viewport,
};
pub use options::ConfettiOptions;
pub use overlay::OverlayStage;
pub use particle::{Particle, Physics, spawn_batch};
