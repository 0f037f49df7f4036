use log::{debug, info};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
};
use nokhwa::Camera;

use crate::CaptureError;

/// Default candidate device order. Index 0 is the usual built-in camera;
/// 2 before 1 matches the external-camera-first bench setup this tool
/// grew up on.
pub const DEFAULT_CANDIDATES: &[u32] = &[0, 2, 1];

/// Try candidate device indices in order; the first successful open wins.
///
/// Generic over the opener so selection logic is testable without
/// hardware.
pub fn select_device<D, E: std::fmt::Display>(
    candidates: &[u32],
    mut open: impl FnMut(u32) -> Result<D, E>,
) -> Result<(u32, D), CaptureError> {
    for &index in candidates {
        match open(index) {
            Ok(device) => {
                info!("opened capture device {index}");
                return Ok((index, device));
            }
            Err(err) => debug!("capture device {index} unavailable: {err}"),
        }
    }
    Err(CaptureError::DeviceUnavailable {
        tried: candidates.to_vec(),
    })
}

/// Open the first available camera and start its stream.
///
/// The resolution/fps are a request; the driver may negotiate something
/// else, so the format actually granted is logged.
pub fn open_camera(
    candidates: &[u32],
    width: u32,
    height: u32,
    fps: u32,
) -> Result<(u32, Camera), CaptureError> {
    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
        CameraFormat::new(Resolution::new(width, height), FrameFormat::MJPEG, fps),
    ));

    let (index, mut camera) = select_device(candidates, |i| {
        Camera::new(CameraIndex::Index(i), requested.clone())
    })?;
    camera.open_stream()?;

    let format = camera.camera_format();
    info!(
        "camera {index}: {}x{} @ {} fps",
        format.width(),
        format.height(),
        format.frame_rate()
    );
    Ok((index, camera))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_working_candidate_wins() {
        let (index, device) =
            select_device(&[0, 2, 1], |i| if i == 2 { Ok(i * 10) } else { Err("busy") }).unwrap();
        assert_eq!(index, 2);
        assert_eq!(device, 20);
    }

    #[test]
    fn candidates_are_tried_in_listed_order() {
        let mut tried = Vec::new();
        let result = select_device(&[3, 1, 4], |i| {
            tried.push(i);
            Err::<(), _>("no device")
        });
        assert!(matches!(
            result,
            Err(CaptureError::DeviceUnavailable { .. })
        ));
        assert_eq!(tried, vec![3, 1, 4]);
    }

    #[test]
    fn later_candidates_are_not_probed_after_a_hit() {
        let mut tried = Vec::new();
        let (index, _) = select_device(&[7, 8, 9], |i| {
            tried.push(i);
            Ok::<_, &str>(())
        })
        .unwrap();
        assert_eq!(index, 7);
        assert_eq!(tried, vec![7]);
    }

    #[test]
    fn empty_candidate_list_is_unavailable() {
        let result = select_device(&[], |_| Ok::<_, &str>(()));
        assert!(matches!(
            result,
            Err(CaptureError::DeviceUnavailable { tried }) if tried.is_empty()
        ));
    }
}
