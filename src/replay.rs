//! Scripted input playback.
//!
//! A replay script is a JSON array of input events, each optionally
//! preceded by a pause:
//!
//! ```json
//! [
//!   { "type": "cursor_moved", "x": 400.0, "y": 300.0 },
//!   { "type": "mouse_button", "button": "left", "pressed": true },
//!   { "type": "mouse_button", "button": "left", "pressed": false },
//!   { "wait": 1.5, "type": "key", "code": "KeyN" }
//! ]
//! ```
//!
//! Events go through an [`InputProcessor`] exactly as live input would,
//! and the engine is stepped at a fixed 60 Hz so runs are deterministic.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::camera::CameraPose;
use crate::engine::{ResortCommand, ResortEngine};
use crate::error::ResortError;
use crate::input::{InputEvent, InputProcessor};

/// Fixed frame step used during playback, in seconds.
pub const FRAME_STEP: f32 = 1.0 / 60.0;

/// Upper bound on frames spent waiting for the camera to settle at the
/// end of a script.
const MAX_SETTLE_FRAMES: u32 = 600;

/// Longest single pause a script may request: ten minutes of frames.
const MAX_WAIT_FRAMES: u64 = 36_000;

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    /// Seconds of simulated time to run before delivering the event.
    #[serde(default)]
    pub wait: f32,
    /// The event to deliver.
    #[serde(flatten)]
    pub event: InputEvent,
}

/// What happened during a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    /// Frames stepped.
    pub frames: u64,
    /// Commands the input processor produced.
    pub commands: usize,
    /// Every label text that became visible, in order.
    pub hovered: Vec<String>,
    /// Detail panel text after each click that selected something.
    pub selections: Vec<String>,
    /// Camera pose once the script finished and the camera settled.
    pub final_pose: CameraPose,
}

/// Parse a replay script from JSON text.
///
/// # Errors
///
/// Returns [`ResortError::ReplayParse`] if the text is not a valid script.
pub fn parse_script(json: &str) -> Result<Vec<ReplayStep>, ResortError> {
    serde_json::from_str(json).map_err(|e| ResortError::ReplayParse(e.to_string()))
}

/// Read and parse a replay script file.
///
/// # Errors
///
/// Returns [`ResortError`] if the file cannot be read or parsed.
pub fn load_script(path: &Path) -> Result<Vec<ReplayStep>, ResortError> {
    let json = std::fs::read_to_string(path)?;
    parse_script(&json)
}

/// Drives an engine from a script at a fixed frame rate.
pub struct Replay<'a> {
    engine: &'a mut ResortEngine,
    input: InputProcessor,
    start: Instant,
    clock: Duration,
    frames: u64,
    commands: usize,
    hovered: Vec<String>,
    selections: Vec<String>,
}

impl<'a> Replay<'a> {
    /// Replay into `engine`, mapping keys with the engine's configured
    /// bindings.
    #[must_use]
    pub fn new(engine: &'a mut ResortEngine) -> Self {
        let input =
            InputProcessor::with_key_bindings(engine.options().keybindings.clone());
        Self {
            engine,
            input,
            start: Instant::now(),
            clock: Duration::ZERO,
            frames: 0,
            commands: 0,
            hovered: Vec::new(),
            selections: Vec::new(),
        }
    }

    /// Play every step, then let the camera settle.
    pub fn run(mut self, script: &[ReplayStep]) -> ReplaySummary {
        for step in script {
            self.wait(step.wait);
            self.deliver(&step.event);
            self.step_frame();
        }

        let mut settle = 0;
        while self.engine.camera().is_animating() && settle < MAX_SETTLE_FRAMES {
            self.step_frame();
            settle += 1;
        }

        ReplaySummary {
            frames: self.frames,
            commands: self.commands,
            hovered: self.hovered,
            selections: self.selections,
            final_pose: self.engine.camera().pose(),
        }
    }

    fn wait(&mut self, seconds: f32) {
        if !(seconds.is_finite() && seconds > 0.0) {
            return;
        }
        let frames = (seconds / FRAME_STEP).ceil() as u64;
        if frames > MAX_WAIT_FRAMES {
            log::warn!(
                "wait of {seconds}s exceeds {MAX_WAIT_FRAMES} frames; truncating"
            );
        }
        for _ in 0..frames.min(MAX_WAIT_FRAMES) {
            self.step_frame();
        }
    }

    fn step_frame(&mut self) {
        let _ = self.engine.frame(FRAME_STEP);
        self.clock += Duration::from_secs_f32(FRAME_STEP);
        self.frames += 1;
    }

    fn deliver(&mut self, event: &InputEvent) {
        let now = self.start + self.clock;
        for command in self.input.handle_event_at(event, now) {
            self.commands += 1;
            let kind = command.clone();
            let label_before = self.visible_label();
            self.engine.execute(command);

            match kind {
                ResortCommand::Hover { .. } => {
                    let label = self.visible_label();
                    if label != label_before {
                        if let Some(text) = label {
                            log::info!("hover: {text}");
                            self.hovered.push(text);
                        }
                    }
                }
                ResortCommand::Click { .. } => {
                    let panel = self.engine.panel();
                    if panel.is_visible() {
                        log::info!("selected: {}", panel.text());
                        self.selections.push(panel.text().to_owned());
                    } else {
                        log::info!("selection cleared");
                    }
                }
                _ => log::debug!("replayed {kind:?}"),
            }
        }
    }

    fn visible_label(&self) -> Option<String> {
        self.engine.labels().visible().map(|l| l.text.clone())
    }
}
