//! Frame timing.

use std::time::Duration;

/// Accumulates frame times and reports frames-per-second about once a second.
#[derive(Debug, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed: Duration,
    total_frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. Returns the average FPS once at least a second
    /// has accumulated, then starts a new window.
    pub fn record(&mut self, frame_time: Duration) -> Option<f32> {
        self.frames += 1;
        self.total_frames += 1;
        self.elapsed += frame_time;

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed.as_secs_f32();
        log::info!("FPS: {:.2}", fps);

        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(fps)
    }

    /// Frames recorded since creation.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
