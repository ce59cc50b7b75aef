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

//! Stallmark Command Line Interface

use clap::Parser;
use stallmark_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Stallmark - serialization stall benchmark
///
/// Builds a large in-memory dataset, serializes all of it in one pass and
/// shows whether the main loop keeps its frame pacing while that happens.
///
/// # Examples
///
/// ```bash
/// # One run on a worker, watching the main loop
/// stallmark run --size 40000
///
/// # The same run blocking the main loop
/// stallmark run --size 40000 --inline
///
/// # Repeated measurement
/// stallmark bench --iterations 10 --json
/// ```
#[derive(Parser)]
#[command(name = "stallmark")]
#[command(author, version, about = "Stallmark - serialization stall benchmark", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let default_directive = if cli.verbose {
        "stallmark=debug"
    } else {
        "stallmark=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
