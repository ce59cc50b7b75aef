// Stallmark - Serialization Stall Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Orbit heartbeat and frame-gap statistics.
//!
//! The orbit is the liveness indicator of the main loop: it advances with
//! wall time, so a blocked loop shows up as a jump in angle and as a long
//! gap between frames.

use std::time::{Duration, Instant};

/// One full revolution.
pub const ORBIT_PERIOD: Duration = Duration::from_millis(2_000);

/// Rotating indicator driven by the main loop.
#[derive(Debug, Clone)]
pub struct Orbit {
    period: Duration,
    started: Option<Instant>,
}

impl Default for Orbit {
    fn default() -> Self {
        Self::new()
    }
}

impl Orbit {
    /// Stopped orbit with the standard period.
    pub fn new() -> Self {
        Self {
            period: ORBIT_PERIOD,
            started: None,
        }
    }

    /// Use a different revolution period. Zero is clamped to 1 ms.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period.max(Duration::from_millis(1));
        self
    }

    /// Revolution period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start animating; a running orbit is left alone.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Stop animating and reset to 0°.
    pub fn stop(&mut self) {
        self.started = None;
    }

    /// Whether the orbit is animating.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Angle in degrees in `[0, 360)`; 0 when stopped.
    pub fn angle(&self, now: Instant) -> f64 {
        match self.started {
            Some(started) => self.angle_after(now.saturating_duration_since(started)),
            None => 0.0,
        }
    }

    /// Angle after `elapsed` of linear rotation.
    pub fn angle_after(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_nanos();
        let phase = elapsed.as_nanos() % period;
        phase as f64 * 360.0 / period as f64
    }
}

/// Frame pacing observed by the main loop.
#[derive(Debug, Clone)]
pub struct FrameStats {
    late_threshold: Duration,
    last_frame: Option<Instant>,
    frames: u64,
    gaps: u64,
    total_gap: Duration,
    max_gap: Duration,
    late_frames: u64,
}

impl FrameStats {
    /// Track frames, counting gaps above `late_threshold` as late.
    pub fn new(late_threshold: Duration) -> Self {
        Self {
            late_threshold,
            last_frame: None,
            frames: 0,
            gaps: 0,
            total_gap: Duration::ZERO,
            max_gap: Duration::ZERO,
            late_frames: 0,
        }
    }

    /// Record a frame drawn at `now`.
    pub fn record(&mut self, now: Instant) {
        if let Some(previous) = self.last_frame {
            let gap = now.saturating_duration_since(previous);
            self.gaps += 1;
            self.total_gap += gap;
            self.max_gap = self.max_gap.max(gap);
            if gap > self.late_threshold {
                self.late_frames += 1;
            }
        }
        self.last_frame = Some(now);
        self.frames += 1;
    }

    /// Frames recorded.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Longest gap between two consecutive frames.
    pub fn max_gap(&self) -> Duration {
        self.max_gap
    }

    /// Mean gap between consecutive frames, zero with fewer than two frames.
    pub fn mean_gap(&self) -> Duration {
        match u32::try_from(self.gaps) {
            Ok(0) => Duration::ZERO,
            Ok(gaps) => self.total_gap / gaps,
            Err(_) => Duration::from_secs_f64(self.total_gap.as_secs_f64() / self.gaps as f64),
        }
    }

    /// Frames that arrived later than the threshold.
    pub fn late_frames(&self) -> u64 {
        self.late_frames
    }

    /// Late threshold.
    pub fn late_threshold(&self) -> Duration {
        self.late_threshold
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} frames, mean gap {:.1} ms, max gap {:.1} ms, {} late (> {} ms)",
            self.frames,
            self.mean_gap().as_secs_f64() * 1_000.0,
            self.max_gap.as_secs_f64() * 1_000.0,
            self.late_frames,
            self.late_threshold.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_angle_wraps() {
        let orbit = Orbit::new();
        assert_eq!(orbit.angle_after(Duration::ZERO), 0.0);
        assert_eq!(orbit.angle_after(Duration::from_millis(500)), 90.0);
        assert_eq!(orbit.angle_after(Duration::from_millis(1_000)), 180.0);
        assert_eq!(orbit.angle_after(Duration::from_millis(2_000)), 0.0);
        assert_eq!(orbit.angle_after(Duration::from_millis(2_500)), 90.0);
    }

    #[test]
    fn test_orbit_start_stop() {
        let origin = Instant::now();
        let mut orbit = Orbit::new();
        assert_eq!(orbit.angle(origin + Duration::from_millis(500)), 0.0);

        orbit.start(origin);
        orbit.start(origin + Duration::from_millis(100));
        assert!(orbit.is_running());
        assert_eq!(orbit.angle(origin + Duration::from_millis(1_500)), 270.0);

        orbit.stop();
        assert!(!orbit.is_running());
        assert_eq!(orbit.angle(origin + Duration::from_millis(1_500)), 0.0);
    }

    #[test]
    fn test_zero_period_clamped() {
        let orbit = Orbit::new().with_period(Duration::ZERO);
        assert_eq!(orbit.period(), Duration::from_millis(1));
        assert!(orbit.angle_after(Duration::from_secs(3)) < 360.0);
    }

    #[test]
    fn test_frame_stats() {
        let origin = Instant::now();
        let mut stats = FrameStats::new(Duration::from_millis(50));
        assert_eq!(stats.mean_gap(), Duration::ZERO);

        stats.record(origin);
        stats.record(origin + Duration::from_millis(16));
        stats.record(origin + Duration::from_millis(32));
        stats.record(origin + Duration::from_millis(232));

        assert_eq!(stats.frames(), 4);
        assert_eq!(stats.max_gap(), Duration::from_millis(200));
        assert_eq!(stats.mean_gap(), Duration::from_millis(232) / 3);
        assert_eq!(stats.late_frames(), 1);
        assert!(stats.summary().starts_with("4 frames"));
    }
}
