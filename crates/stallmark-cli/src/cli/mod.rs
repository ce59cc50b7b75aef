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

//! CLI command definitions and argument parsing.
//!
//! - [`workload`]: commands that run the serialization workload (run, bench)
//! - [`inspect`]: commands that print generated data (sample, items)

mod inspect;
mod workload;

use crate::error::CliError;
use clap::Subcommand;

pub use inspect::InspectCommands;
pub use workload::WorkloadCommands;

/// Environment variable overriding the dataset size.
pub const DATASET_SIZE_ENV: &str = "STALLMARK_DATASET_SIZE";

/// Top-level CLI commands enum.
///
/// ```no_run
/// use clap::Parser;
/// use stallmark_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Workload(WorkloadCommands),

    #[command(flatten)]
    Inspect(InspectCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails; the message is printed by `main`.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Workload(cmd) => cmd.execute(),
            Commands::Inspect(cmd) => cmd.execute(),
        }
    }
}
