use crate::{camera::Projection, Cuboid, LightConfig, ViewerConfig};

use ilattice::glam::Vec3;
use std::time::{Duration, Instant};

/// A double-buffered, depth-tested 3D drawing surface with a transform stack.
///
/// Transforms compose like a fixed-function pipeline: each call multiplies
/// onto the current matrix, so the last transform issued is the first one
/// applied to a vertex.
pub trait Display {
    /// Replaces the projection.
    fn set_perspective(&mut self, projection: &Projection, aspect: f32);
    fn translate(&mut self, offset: Vec3);
    fn rotate(&mut self, degrees: f32, axis: Vec3);
    fn push_transform(&mut self);
    fn pop_transform(&mut self);

    fn set_light(&mut self, light: &LightConfig);
    /// Clears color and depth.
    fn clear(&mut self);
    /// Draws a flat-colored rectangular solid under the current transform.
    fn draw_cuboid(&mut self, cuboid: &Cuboid, color: [f32; 3]);
    /// Swaps buffers.
    fn present(&mut self);

    /// Frees graphics resources. Called once when the session stops.
    fn release(&mut self);
}

/// Paces the render loop.
pub trait FrameLimiter {
    /// Blocks until the next tick boundary.
    fn wait_for_next_tick(&mut self);
}

/// Sleeps so consecutive ticks are at least one interval apart, measured on
/// the monotonic clock.
#[derive(Debug)]
pub struct FixedRateLimiter {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FixedRateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Ticks at the configured `target_fps`.
    pub fn for_config(config: &ViewerConfig) -> Self {
        Self::new(config.tick_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameLimiter for FixedRateLimiter {
    fn wait_for_next_tick(&mut self) {
        if let Some(last_tick) = self.last_tick {
            let elapsed = last_tick.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_spaces_ticks() {
        let interval = Duration::from_millis(5);
        let mut limiter = FixedRateLimiter::new(interval);
        let start = Instant::now();
        limiter.wait_for_next_tick();
        for _ in 0..3 {
            limiter.wait_for_next_tick();
        }
        assert!(start.elapsed() >= 3 * interval);
    }

    #[test]
    fn interval_from_config() {
        let limiter = FixedRateLimiter::for_config(&ViewerConfig::default());
        assert_eq!(limiter.interval(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn zero_interval_never_sleeps() {
        let mut limiter = FixedRateLimiter::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..100 {
            limiter.wait_for_next_tick();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
