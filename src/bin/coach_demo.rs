use serde::Deserialize;
use shot_coach::horizon::profile::{blur_rows, downsample_luma};
use shot_coach::image::io::{load_grayscale_image, save_grayscale_f32, write_json_file};
use shot_coach::{CoachEngine, EngineParams, FrameInput, Rect};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CoachDemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub roll_deg: f32,
    #[serde(default)]
    pub subject: Option<SubjectConfig>,
    /// Pinned strategy id; omit for auto mode.
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub engine: EngineParams,
    pub report_json: PathBuf,
    /// Optional PNG of the blurred grid the horizon pipeline works on.
    #[serde(default)]
    pub debug_grid: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct SubjectConfig {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    #[serde(default)]
    pub gaze_yaw_deg: Option<f32>,
}

pub fn load_config(path: &Path) -> Result<CoachDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let subject_box = config
        .subject
        .as_ref()
        .map(|s| Rect::new(s.left, s.top, s.right, s.bottom));
    let gaze_yaw_deg = config.subject.as_ref().and_then(|s| s.gaze_yaw_deg);

    let mut engine = CoachEngine::new(config.engine);
    let report = engine.process(FrameInput {
        roll_deg: config.roll_deg,
        luma: gray.as_view(),
        subject_box,
        gaze_yaw_deg,
        strategy_id: config.strategy.as_deref(),
        auto: config.strategy.is_none(),
    });

    println!(
        "strategy={} score={} horizon={:?} latency_ms={:.3}",
        report.strategy.id(),
        report.evaluation.score,
        report.horizon_y,
        report.latency_ms
    );
    for hint in &report.evaluation.hints {
        println!("  hint: {hint:?}");
    }

    write_json_file(&config.report_json, &report)?;
    println!("report written to {}", config.report_json.display());

    if let Some(debug_path) = &config.debug_grid {
        let horizon = &config.engine.horizon;
        let mut grid = downsample_luma(&gray.as_view(), horizon.grid_w, horizon.grid_h);
        blur_rows(&mut grid);
        save_grayscale_f32(&grid, debug_path)?;
        println!("debug grid written to {}", debug_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: coach_demo <config.json>".to_string()
}
