// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted gesture against a pinch-to-zoom engine and prints what
//! the host would see.
//!
//! ```text
//! cargo run -p understory_demos -- -vv
//! cargo run -p understory_demos -- my_script.json --config zoom.json
//! ```
//!
//! A script is a JSON object with the viewport size, the image size, and a
//! list of steps tagged by `type`: `down`, `move`, `up`, `secondary_up`
//! (each with a point `at`), `pinch_start`/`pinch_move` (two points `a` and
//! `b`), `pinch_end`, `layout` (`width`, `height`), `save` and `restore`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use kurbo::Point;
use serde::Deserialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use understory_image_fit::PixelSize;
use understory_pinch_zoom::gesture::PointerSample;
use understory_pinch_zoom::pinch::PinchTracker;
use understory_pinch_zoom::{PinchToZoom, PinchToZoomConfig, SavedState, ZoomEvent};

const DEFAULT_SCRIPT: &str = r#"{
    "view": { "width": 800, "height": 600 },
    "image": { "width": 1600, "height": 600 },
    "steps": [
        { "type": "layout", "width": 800, "height": 600 },
        { "type": "down", "at": { "x": 380.0, "y": 300.0 } },
        { "type": "pinch_start", "a": { "x": 380.0, "y": 300.0 }, "b": { "x": 420.0, "y": 300.0 } },
        { "type": "pinch_move", "a": { "x": 360.0, "y": 300.0 }, "b": { "x": 440.0, "y": 300.0 } },
        { "type": "pinch_move", "a": { "x": 340.0, "y": 300.0 }, "b": { "x": 460.0, "y": 300.0 } },
        { "type": "pinch_end" },
        { "type": "secondary_up", "at": { "x": 460.0, "y": 300.0 } },
        { "type": "down", "at": { "x": 400.0, "y": 300.0 } },
        { "type": "move", "at": { "x": 250.0, "y": 320.0 } },
        { "type": "move", "at": { "x": -900.0, "y": 320.0 } },
        { "type": "up", "at": { "x": -900.0, "y": 320.0 } },
        { "type": "save" },
        { "type": "layout", "width": 1200, "height": 600 },
        { "type": "restore" },
        { "type": "layout", "width": 1200, "height": 600 },
        { "type": "down", "at": { "x": 10.0, "y": 10.0 } },
        { "type": "up", "at": { "x": 11.0, "y": 12.0 } }
    ]
}"#;

/// Replay a pinch-to-zoom gesture script.
#[derive(Debug, Parser)]
#[command(name = "pinch_zoom_replay", version, about)]
struct Cli {
    /// Gesture script (JSON). The built-in script is used when omitted.
    script: Option<PathBuf>,

    /// Engine configuration (JSON with camelCase keys).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Deserialize)]
struct Script {
    view: PixelSize,
    image: PixelSize,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Step {
    Down { at: Point },
    Move { at: Point },
    Up { at: Point },
    SecondaryUp { at: Point },
    PinchStart { a: Point, b: Point },
    PinchMove { a: Point, b: Point },
    PinchEnd,
    Layout { width: u32, height: u32 },
    Save,
    Restore,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let script: Script = match &cli.script {
        Some(path) => serde_json::from_str(&read(path)?)
            .with_context(|| format!("Invalid script {}", path.display()))?,
        None => serde_json::from_str(DEFAULT_SCRIPT).context("Invalid built-in script")?,
    };
    let config: PinchToZoomConfig = match &cli.config {
        Some(path) => serde_json::from_str(&read(path)?)
            .with_context(|| format!("Invalid config {}", path.display()))?,
        None => PinchToZoomConfig::default(),
    };

    let mut engine = PinchToZoom::from_config(&config).context("Rejected configuration")?;
    report(0, "image", engine.set_source_image(script.image));
    report(0, "layout", engine.on_layout(script.view));

    let mut tracker = PinchTracker::default();
    let mut saved: Option<String> = None;
    for (index, step) in script.steps.into_iter().enumerate() {
        let n = index + 1;
        debug!(step = n, ?step, "replaying");
        match step {
            Step::Down { at } => report(n, "down", engine.handle_pointer(PointerSample::down(at))),
            Step::Move { at } => report(n, "move", engine.handle_pointer(PointerSample::moved(at))),
            Step::Up { at } => report(n, "up", engine.handle_pointer(PointerSample::up(at))),
            Step::SecondaryUp { at } => report(
                n,
                "secondary_up",
                engine.handle_pointer(PointerSample::secondary_up(at)),
            ),
            Step::PinchStart { a, b } => {
                if tracker.begin(a, b) {
                    engine.on_scale_begin();
                } else {
                    warn!(step = n, "pointers too close to start a pinch");
                }
            }
            Step::PinchMove { a, b } => {
                if let Some(pinch) = tracker.update(a, b) {
                    report(n, "pinch", engine.on_scale(pinch.factor, pinch.focus));
                }
            }
            Step::PinchEnd => tracker.end(),
            Step::Layout { width, height } => report(
                n,
                "layout",
                engine.on_layout(PixelSize::new(width, height)),
            ),
            Step::Save => {
                let json = engine.save_state().to_json()?;
                println!("{n:>3} save     {json}");
                saved = Some(json);
            }
            Step::Restore => {
                let Some(json) = &saved else {
                    bail!("step {n}: restore without a preceding save");
                };
                engine.restore_state(SavedState::from_json(json)?);
                println!("{n:>3} restore  bounds check pending");
            }
        }
    }

    info!(debug_info = ?engine.debug_info(), "replay finished");
    Ok(())
}

fn report(step: usize, label: &str, event: Option<ZoomEvent>) {
    match event {
        Some(ZoomEvent::TransformChanged(t)) => println!(
            "{step:>3} {label:<8} scale {:.4} translation ({:.1}, {:.1})",
            t.scale, t.translation.x, t.translation.y
        ),
        Some(ZoomEvent::Tap) => println!("{step:>3} {label:<8} tap"),
        None => {}
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Log filter for the engine crates; everything else stays at `warn`.
fn default_filter(verbose: u8, quiet: bool) -> String {
    if quiet {
        return "error".to_owned();
    }
    let level = match verbose {
        0 => return "warn".to_owned(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,understory_image_fit={level},understory_pinch_zoom={level}")
}

/// `RUST_LOG`, when set, takes precedence over the command-line verbosity.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .try_init();
}
