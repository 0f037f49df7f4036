use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;
use std::time::Duration;

use clap::Parser;
use image::{GrayImage, RgbImage};
use log::{error, info, warn, LevelFilter};
use serde::Deserialize;

use quad_gauge::capture::{CaptureConfig, CaptureLoop, LatestSlot, DEFAULT_CANDIDATES};
use quad_gauge::measure::DEFAULT_REFERENCE_WIDTH_CM;
use quad_gauge::{analyze_frame, overlay, Calibration, HsvRange, QuadParams, Rgb};

/// Detect color-keyed squares in live video and measure the distance
/// between them.
#[derive(Parser, Debug)]
#[command(name = "quad-gauge", version, about)]
struct Args {
    /// Camera device index to try; repeat to set the candidate order.
    #[arg(long = "device", value_name = "INDEX")]
    devices: Vec<u32>,

    /// Target color as six hex digits.
    #[arg(long)]
    color: Option<String>,

    /// Physical width of the calibration reference, in cm.
    #[arg(long)]
    reference_cm: Option<f32>,

    /// Calibrate from the first detected shape once this many frames
    /// have been processed.
    #[arg(long, default_value_t = 30)]
    calibrate_after: u64,

    /// Stop after this many processed frames (0 = run until killed).
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// JSON config file; command-line flags win over its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write annotated frame and mask PNGs into this directory.
    #[arg(long)]
    dump_dir: Option<PathBuf>,

    /// Emit one JSON report line per frame instead of text labels.
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

/// On-disk overrides for the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    color: Option<String>,
    reference_cm: Option<f32>,
    devices: Option<Vec<u32>>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Capture(#[from] quad_gauge::capture::CaptureError),
    #[error(transparent)]
    Color(#[from] quad_gauge::core::HexError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err}");
        eprintln!("quad-gauge: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    quad_gauge::core::init_with_level(args.log_level)?;

    let file = match &args.config {
        Some(path) => serde_json::from_str::<FileConfig>(&fs::read_to_string(path)?)?,
        None => FileConfig::default(),
    };

    let color_hex = args
        .color
        .or(file.color)
        .unwrap_or_else(|| "e4ecd7".to_string());
    let reference_cm = args
        .reference_cm
        .or(file.reference_cm)
        .unwrap_or(DEFAULT_REFERENCE_WIDTH_CM);
    let devices = if args.devices.is_empty() {
        file.devices.unwrap_or_else(|| DEFAULT_CANDIDATES.to_vec())
    } else {
        args.devices
    };

    let base = Rgb::from_hex(&color_hex)?.to_hsv();
    let range = HsvRange::around(base);
    info!("target color #{color_hex} → hsv {base:?}, window {range:?}");

    let params = QuadParams::default();
    let calibration = Arc::new(RwLock::new(Calibration::new()));
    let slot: LatestSlot<(RgbImage, quad_gauge::FrameAnalysis)> = LatestSlot::new();

    let capture_config = CaptureConfig {
        candidates: devices,
        ..CaptureConfig::default()
    };
    let loop_calibration = Arc::clone(&calibration);
    let loop_params = params.clone();
    let mut capture = CaptureLoop::spawn(capture_config, slot.clone(), move |frame| {
        let calibration = *loop_calibration
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let analysis = analyze_frame(frame, &range, &loop_params, &calibration);

        let mut annotated = frame.clone();
        overlay::draw_quads(&mut annotated, &analysis.quads);
        overlay::draw_center_line(&mut annotated, &analysis.quads);

        (annotated, analysis)
    })?;

    let mut processed: u64 = 0;
    let mut calibrated = false;

    while args.frames == 0 || processed < args.frames {
        thread::sleep(Duration::from_millis(33));
        let Some((annotated, analysis)) = slot.take() else {
            continue;
        };
        processed += 1;

        if !calibrated && processed >= args.calibrate_after {
            let mut state = calibration
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            match state.calibrate(analysis.quads.first(), reference_cm) {
                Ok(_) => {
                    info!("{}", overlay::calibration_label(&state));
                    calibrated = true;
                }
                // No reference in view yet; try again on the next frame.
                Err(err) => warn!("calibration skipped: {err}"),
            }
        }

        if args.json {
            println!("{}", serde_json::to_string(&analysis.report)?);
        } else {
            info!(
                "{} | {}",
                overlay::shape_count_label(&analysis.report),
                overlay::distance_label(&analysis.report)
            );
        }

        if let Some(dir) = &args.dump_dir {
            dump(dir, processed, &annotated, &analysis.mask)?;
        }
    }

    capture.stop();
    Ok(())
}

fn dump(dir: &Path, seq: u64, frame: &RgbImage, mask: &GrayImage) -> Result<(), CliError> {
    fs::create_dir_all(dir)?;
    frame.save(dir.join(format!("frame-{seq:05}.png")))?;
    mask.save(dir.join(format!("mask-{seq:05}.png")))?;
    Ok(())
}
