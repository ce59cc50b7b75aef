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

//! Run command - the main event loop.
//!
//! Ticks the orbit every frame, triggers benchmark runs through the
//! dispatcher and drains completions, then reports how the frame pacing
//! held up. With `inline` the run executes on the loop itself, which is
//! the stall this tool exists to show.

use super::{build_dataset, demo_config, print_json};
use crate::error::CliError;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use stallmark_bench::{BenchmarkResult, SerializationBenchmark};
use stallmark_dispatch::{
    Completion, Dispatcher, FrameStats, Orbit, RunStatus, StatusTone, TriggerOutcome,
};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, trace};

/// A frame is late once it arrives this many frame intervals after the last.
const LATE_FRAME_FACTOR: u32 = 3;

/// Options for [`run`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Requested dataset size; negative means empty.
    pub size: i64,
    /// Fixed seed, or `None` for fresh entropy.
    pub seed: Option<u64>,
    /// Number of benchmark runs, one after another.
    pub runs: u32,
    /// Frame interval of the main loop.
    pub frame: Duration,
    /// Execute runs on the main loop instead of a worker.
    pub inline: bool,
    /// Emit a JSON report instead of status text.
    pub json: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            size: stallmark_bench::sizes::REFERENCE as i64,
            seed: None,
            runs: 1,
            frame: Duration::from_millis(16),
            inline: false,
            json: false,
        }
    }
}

/// Outcome of the event loop.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Models in the dataset.
    pub dataset_size: usize,
    /// Whether runs executed on the main loop.
    pub inline: bool,
    /// Successful runs, in completion order.
    pub results: Vec<BenchmarkResult>,
    /// Messages of failed runs.
    pub failures: Vec<String>,
    /// Frames drawn by the loop.
    pub frames: u64,
    /// Mean gap between frames, in milliseconds.
    pub mean_frame_gap_ms: f64,
    /// Longest gap between frames, in milliseconds.
    pub max_frame_gap_ms: f64,
    /// Frames later than the late threshold.
    pub late_frames: u64,
}

/// Generate the dataset and drive the event loop until every run completes.
///
/// # Errors
///
/// Returns `Err` if the dataset is too large, if JSON output fails, or if
/// any run fails. Failed runs are still reported before the error.
pub fn run(options: &RunOptions) -> Result<RunReport, CliError> {
    let config = demo_config(options.size, options.seed);
    let dataset = Arc::new(build_dataset(&config)?);
    let mut dispatcher = Dispatcher::new(SerializationBenchmark::new(config.xml.clone()), dataset);

    let frame = options.frame.max(Duration::from_millis(1));
    let mut orbit = Orbit::new();
    let mut frames = FrameStats::new(frame * LATE_FRAME_FACTOR);
    let mut completions: Vec<Completion> = Vec::with_capacity(options.runs as usize);

    orbit.start(Instant::now());
    info!(runs = options.runs, inline = options.inline, "event loop started");

    while completions.len() < options.runs as usize {
        let now = Instant::now();
        frames.record(now);
        trace!(angle = orbit.angle(now), "frame");

        if let Some(completion) = dispatcher.poll() {
            show_status(&RunStatus::from(&completion), options.json);
            completions.push(completion);
        } else if dispatcher.trigger_enabled()
            && dispatcher.runs_started() < u64::from(options.runs)
        {
            if options.inline {
                show_status(&RunStatus::Running, options.json);
                if let Some(completion) = dispatcher.run_inline() {
                    show_status(&RunStatus::from(&completion), options.json);
                    completions.push(completion);
                }
            } else if let TriggerOutcome::Started(_) = dispatcher.trigger() {
                show_status(&dispatcher.status(), options.json);
            }
        }

        thread::sleep(frame);
    }
    orbit.stop();

    let report = build_report(dispatcher.dataset().len(), options.inline, &completions, &frames);
    if options.json {
        print_json(&report)?;
    } else {
        println!("{}", frames.summary());
    }

    if report.failures.is_empty() {
        Ok(report)
    } else {
        Err(CliError::RunsFailed {
            failed: report.failures.len(),
            total: completions.len(),
        })
    }
}

fn build_report(
    dataset_size: usize,
    inline: bool,
    completions: &[Completion],
    frames: &FrameStats,
) -> RunReport {
    let mut results = Vec::new();
    let mut failures = Vec::new();
    for completion in completions {
        match &completion.outcome {
            Ok(result) => results.push(*result),
            Err(err) => failures.push(err.to_string()),
        }
    }

    RunReport {
        dataset_size,
        inline,
        results,
        failures,
        frames: frames.frames(),
        mean_frame_gap_ms: frames.mean_gap().as_secs_f64() * 1_000.0,
        max_frame_gap_ms: frames.max_gap().as_secs_f64() * 1_000.0,
        late_frames: frames.late_frames(),
    }
}

fn show_status(status: &RunStatus, json: bool) {
    if !json {
        println!("{}", paint(status));
    }
}

fn paint(status: &RunStatus) -> ColoredString {
    let text = status.to_string();
    match status.tone() {
        StatusTone::Neutral => text.normal(),
        StatusTone::Alert => text.red(),
        StatusTone::Success => text.green(),
        StatusTone::Error => text.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick(size: i64, runs: u32) -> RunOptions {
        RunOptions {
            size,
            seed: Some(3),
            runs,
            frame: Duration::from_millis(1),
            inline: false,
            json: true,
        }
    }

    #[test]
    fn test_worker_runs_complete() {
        let report = run(&quick(20, 2)).unwrap();
        assert_eq!(report.dataset_size, 20);
        assert_eq!(report.results.len(), 2);
        assert!(report.results.iter().all(|r| r.object_count == 20));
        assert_eq!(report.results[0].total_length, report.results[1].total_length);
        assert!(report.frames >= 2);
    }

    #[test]
    fn test_inline_runs_complete() {
        let options = RunOptions {
            inline: true,
            ..quick(10, 1)
        };
        let report = run(&options).unwrap();
        assert!(report.inline);
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn test_negative_size_runs_empty() {
        let report = run(&quick(-5, 1)).unwrap();
        assert_eq!(report.dataset_size, 0);
        assert_eq!(report.results[0].total_length, 0);
    }
}
