use std::time::{Duration, Instant};

const FPS_SMOOTHING: f64 = 0.1;

/// Caps the tick rate and keeps a smoothed estimate of the achieved rate.
#[derive(Clone, Debug)]
pub(crate) struct FramePacer {
    period: Option<Duration>,
    last: Instant,
    fps: f64,
}

impl FramePacer {
    /// `target_fps == 0` disables the cap.
    pub(crate) fn new(target_fps: u32) -> Self {
        Self {
            period: period_for(target_fps),
            last: Instant::now(),
            fps: 0.0,
        }
    }

    /// Exponentially smoothed ticks per second; 0 before the first tick.
    pub(crate) fn fps(&self) -> f64 {
        self.fps
    }

    /// Sleep until one period has passed since the previous call, then update the estimate.
    pub(crate) fn wait(&mut self) {
        if let Some(period) = self.period {
            let deadline = self.last + period;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        if dt > 0.0 {
            let inst = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                inst
            } else {
                self.fps + (inst - self.fps) * FPS_SMOOTHING
            };
        }
    }
}

fn period_for(target_fps: u32) -> Option<Duration> {
    (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(target_fps)))
}
