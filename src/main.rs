//! `resortview`: replay a JSON input script against the demo resort and
//! log what the framing controller did.

use std::path::Path;

use resortview::options::Options;
use resortview::replay::{load_script, Replay};
use resortview::{ResortEngine, ResortError};

const VIEWPORT: (u32, u32) = (1280, 720);

fn run(script_path: &str, options_path: Option<&str>) -> Result<(), ResortError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let script = load_script(Path::new(script_path))?;
    log::info!("replaying {} events from {script_path}", script.len());

    let mut engine = ResortEngine::resort(options, VIEWPORT);
    let summary = Replay::new(&mut engine).run(&script);

    log::info!(
        "{} frames, {} commands, {} hover labels, {} selections",
        summary.frames,
        summary.commands,
        summary.hovered.len(),
        summary.selections.len()
    );
    let pose = summary.final_pose;
    log::info!(
        "final camera: position {:?} looking at {:?}",
        pose.position,
        pose.look_at
    );
    if let Some(overlay) = engine.selection().overlay() {
        log::info!("overlay at {:?}", overlay.transform.translation);
    }
    let env = engine.environment();
    log::info!("environment: night={} rain={}", env.night, env.rainy);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(script_path) = args.get(1) else {
        log::error!("usage: resortview <events.json> [options.toml]");
        std::process::exit(2);
    };

    if let Err(e) = run(script_path, args.get(2).map(String::as_str)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
