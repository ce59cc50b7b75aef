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

//! Workload commands: the event loop and the synchronous benchmark.

use super::DATASET_SIZE_ENV;
use crate::commands::{self, BenchOptions, RunOptions};
use crate::error::CliError;
use clap::Subcommand;
use stallmark_bench::sizes;
use std::time::Duration;

/// Commands that run the serialization workload.
#[derive(Subcommand)]
pub enum WorkloadCommands {
    /// Run the benchmark off the main loop and watch frame pacing
    ///
    /// Generates the dataset, then drives a main loop that ticks the orbit
    /// every frame and hands each run to a worker. Use --inline to run on
    /// the loop itself and see it stall.
    Run {
        /// Number of models to generate (negative means none)
        #[arg(
            short,
            long,
            default_value_t = sizes::REFERENCE as i64,
            env = DATASET_SIZE_ENV,
            allow_negative_numbers = true
        )]
        size: i64,

        /// Seed for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,

        /// Number of consecutive runs
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,

        /// Main loop frame interval in milliseconds
        #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
        frame_ms: u64,

        /// Execute runs on the main loop (blocks it)
        #[arg(long)]
        inline: bool,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Measure the serialization pass repeatedly
    Bench {
        /// Number of models to generate (negative means none)
        #[arg(
            short,
            long,
            default_value_t = sizes::REFERENCE as i64,
            env = DATASET_SIZE_ENV,
            allow_negative_numbers = true
        )]
        size: i64,

        /// Seed for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,

        /// Measured iterations after one warmup run
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
        iterations: u32,

        /// Print JSON statistics
        #[arg(long)]
        json: bool,
    },
}

impl WorkloadCommands {
    /// Execute the workload command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if generation fails or any run fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            WorkloadCommands::Run {
                size,
                seed,
                runs,
                frame_ms,
                inline,
                json,
            } => commands::run(&RunOptions {
                size,
                seed,
                runs,
                frame: Duration::from_millis(frame_ms),
                inline,
                json,
            })
            .map(|_| ()),
            WorkloadCommands::Bench {
                size,
                seed,
                iterations,
                json,
            } => commands::bench(&BenchOptions {
                size,
                seed,
                iterations,
                json,
            })
            .map(|_| ()),
        }
    }
}
