//! Per-frame timing: frame count and a smoothed FPS estimate.

use web_time::Instant;

/// Frame counter with a smoothed FPS estimate.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Frames ended since construction
    frames: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frames: 0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call after each frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames ended so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
