use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use image::RgbImage;
use log::{debug, info, warn};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::Camera;
use serde::{Deserialize, Serialize};

use crate::device::{open_camera, DEFAULT_CANDIDATES};
use crate::handoff::LatestSlot;
use crate::CaptureError;

/// Capture settings. The resolution/fps are requests; the driver decides
/// what it actually grants.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Device indices to try, in order.
    pub candidates: Vec<u32>,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Post-iteration delay enforcing the loop cadence (~30 fps at 33 ms).
    pub frame_delay_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.to_vec(),
            width: 640,
            height: 480,
            fps: 30,
            frame_delay_ms: 33,
        }
    }
}

/// Handle to a running capture loop.
///
/// The loop thread owns the camera for its whole lifetime: the handle is
/// opened on that thread and released there exactly once, on every exit
/// path. Stopping is cooperative — the flag is checked between
/// iterations, never mid-frame.
pub struct CaptureLoop {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl CaptureLoop {
    /// Start the loop. Blocks until the camera is open so that a failure
    /// to open any candidate device is reported here — the loop never
    /// starts in that case.
    ///
    /// `process` runs on the capture thread for every frame; its output
    /// replaces the slot's previous value.
    pub fn spawn<T, F>(
        config: CaptureConfig,
        slot: LatestSlot<T>,
        mut process: F,
    ) -> Result<Self, CaptureError>
    where
        T: Send + 'static,
        F: FnMut(&RgbImage) -> T + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let delay = Duration::from_millis(config.frame_delay_ms);
        let (ready_tx, ready_rx) = mpsc::channel();

        let join = thread::Builder::new()
            .name("quad-gauge-capture".into())
            .spawn(move || {
                // The camera handle must live on this thread.
                let camera = match open_camera(
                    &config.candidates,
                    config.width,
                    config.height,
                    config.fps,
                ) {
                    Ok((_, camera)) => {
                        let _ = ready_tx.send(Ok(()));
                        camera
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };
                run_loop(camera, &stop_flag, delay, &slot, &mut process);
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                stop,
                join: Some(join),
            }),
            Ok(Err(err)) => {
                let _ = join.join();
                Err(err)
            }
            Err(_) => {
                let _ = join.join();
                Err(CaptureError::Thread(std::io::Error::other(
                    "capture thread exited before opening a device",
                )))
            }
        }
    }

    /// Ask the loop to finish its current iteration, then wait for the
    /// camera to be released.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for CaptureLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop<T>(
    mut camera: Camera,
    stop: &AtomicBool,
    delay: Duration,
    slot: &LatestSlot<T>,
    process: &mut impl FnMut(&RgbImage) -> T,
) {
    while !stop.load(Ordering::Relaxed) {
        match read_frame(&mut camera) {
            Ok(frame) => slot.publish(process(&frame)),
            // Transient: skip this tick, retry on the next one.
            Err(err) => debug!("frame read failed: {err}"),
        }
        thread::sleep(delay);
    }

    if let Err(err) = camera.stop_stream() {
        warn!("stopping camera stream: {err}");
    }
    info!("capture device released");
}

fn read_frame(camera: &mut Camera) -> Result<RgbImage, nokhwa::NokhwaError> {
    camera.frame()?.decode_image::<RgbFormat>()
}
