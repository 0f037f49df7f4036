//! Camera acquisition and the fixed-cadence capture loop.
//!
//! The loop owns the camera handle exclusively: acquired once at spawn,
//! released exactly once when the loop ends. Detection results cross to
//! the presentation side through [`LatestSlot`], an owned-value handoff
//! with no shared mutable pipeline state.

mod device;
mod handoff;
mod worker;

pub use device::{open_camera, select_device, DEFAULT_CANDIDATES};
pub use handoff::LatestSlot;
pub use worker::{CaptureConfig, CaptureLoop};

/// Errors surfaced during capture startup.
///
/// Per-frame read failures are not represented here: they are transient,
/// logged inside the loop, and the next tick retries.
#[derive(thiserror::Error, Debug)]
pub enum CaptureError {
    #[error("no capture device available (tried {tried:?})")]
    DeviceUnavailable { tried: Vec<u32> },
    #[error(transparent)]
    Camera(#[from] nokhwa::NokhwaError),
    #[error("failed to start the capture thread")]
    Thread(#[from] std::io::Error),
}
