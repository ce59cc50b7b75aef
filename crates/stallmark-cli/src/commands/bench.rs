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

//! Bench command - synchronous repeated benchmark with statistics.

use super::{build_dataset, demo_config, print_json};
use crate::error::CliError;
use colored::Colorize;
use stallmark_bench::{measure_runs, RunStatistics, SerializationBenchmark};
use std::time::Duration;

/// Options for [`bench`].
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Requested dataset size; negative means empty.
    pub size: i64,
    /// Fixed seed, or `None` for fresh entropy.
    pub seed: Option<u64>,
    /// Measured iterations after one warmup.
    pub iterations: u32,
    /// Emit JSON instead of a table.
    pub json: bool,
}

/// Measure the serialization pass `iterations` times and print statistics.
///
/// # Errors
///
/// Returns `Err` if generation or any run fails, or `iterations` is zero.
pub fn bench(options: &BenchOptions) -> Result<RunStatistics, CliError> {
    let config = demo_config(options.size, options.seed);
    let dataset = build_dataset(&config)?;
    let benchmark = SerializationBenchmark::new(config.xml.clone());

    let measured = measure_runs(&benchmark, &dataset, options.iterations)?;

    if options.json {
        print_json(&measured)?;
        return Ok(measured);
    }

    let stats = &measured.statistics;
    let first = measured.runs.first().copied().unwrap_or_default();
    println!("{}", "Serialization Benchmark".bold().underline());
    println!();
    println!("  {:<14} {}", "Objects:".cyan(), dataset.len());
    println!("  {:<14} {}", "Length:".cyan(), first.total_length);
    println!("  {:<14} {}", "Iterations:".cyan(), measured.runs.len());
    println!("  {:<14} {}", "Mean:".cyan(), millis(stats.mean));
    println!("  {:<14} {}", "Median:".cyan(), millis(stats.median));
    println!("  {:<14} {}", "Std dev:".cyan(), millis(stats.std_dev));
    println!("  {:<14} {}", "Min:".cyan(), millis(stats.min));
    println!("  {:<14} {}", "Max:".cyan(), millis(stats.max));
    if let Some(throughput) = first.throughput_mbs() {
        println!("  {:<14} {:.2} MB/s", "Throughput:".cyan(), throughput);
    }

    Ok(measured)
}

fn millis(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_reports_every_iteration() {
        let options = BenchOptions {
            size: 15,
            seed: Some(2),
            iterations: 3,
            json: false,
        };
        let measured = bench(&options).unwrap();
        assert_eq!(measured.runs.len(), 3);
        assert!(measured.runs.iter().all(|r| r.object_count == 15));
        assert!(measured.statistics.min <= measured.statistics.max);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let options = BenchOptions {
            size: 1,
            seed: Some(2),
            iterations: 0,
            json: true,
        };
        assert!(matches!(bench(&options), Err(CliError::Bench(_))));
    }

    #[test]
    fn test_millis_format() {
        assert_eq!(millis(Duration::from_micros(1_500)), "1.500 ms");
    }
}
