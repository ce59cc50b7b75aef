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

//! Repeated-run measurement.
//!
//! Runs the serialization benchmark several times over the same dataset and
//! summarizes the wall times.

use crate::benchmark::{BenchmarkResult, SerializationBenchmark};
use crate::datasets::Dataset;
use crate::error::{BenchError, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Statistics from multiple measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Mean duration.
    pub mean: Duration,
    /// Standard deviation.
    pub std_dev: Duration,
    /// Minimum duration.
    pub min: Duration,
    /// Maximum duration.
    pub max: Duration,
    /// Median duration.
    pub median: Duration,
}

/// Every run of a repeated measurement plus its summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunStatistics {
    /// Individual runs in execution order.
    pub runs: Vec<BenchmarkResult>,
    /// Wall-time statistics across `runs`.
    pub statistics: Statistics,
}

/// Computes statistics from a collection of durations.
pub fn compute_statistics(durations: &[Duration]) -> Statistics {
    if durations.is_empty() {
        return Statistics {
            mean: Duration::ZERO,
            std_dev: Duration::ZERO,
            min: Duration::ZERO,
            max: Duration::ZERO,
            median: Duration::ZERO,
        };
    }

    let mut sorted = durations.to_vec();
    sorted.sort();

    let total: Duration = sorted.iter().sum();
    let mean = total / sorted.len() as u32;

    let variance: f64 = sorted
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean.as_nanos() as f64;
            diff * diff
        })
        .sum::<f64>()
        / sorted.len() as f64;

    Statistics {
        mean,
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: sorted[sorted.len() / 2],
    }
}

/// Run `benchmark` `iterations` times over `dataset`.
///
/// One untimed warmup run precedes the measured ones.
pub fn measure_runs(
    benchmark: &SerializationBenchmark,
    dataset: &Dataset,
    iterations: u32,
) -> Result<RunStatistics> {
    if iterations == 0 {
        return Err(BenchError::InvalidArgument {
            parameter: "iterations".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    benchmark.run(dataset)?;

    let runs = (0..iterations)
        .map(|_| benchmark.run(dataset))
        .collect::<Result<Vec<_>>>()?;
    let durations: Vec<Duration> = runs.iter().map(|r| r.elapsed).collect();
    let statistics = compute_statistics(&durations);

    debug!(
        iterations,
        mean_ms = statistics.mean.as_millis() as u64,
        "measured benchmark runs"
    );
    Ok(RunStatistics { runs, statistics })
}
