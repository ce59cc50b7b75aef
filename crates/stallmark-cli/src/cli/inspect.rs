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

//! Inspection commands: sample documents and display rows.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use stallmark_bench::sizes;

/// Commands that print generated data.
#[derive(Subcommand)]
pub enum InspectCommands {
    /// Print one rendered SampleData document
    Sample {
        /// Seed for a reproducible model
        #[arg(long)]
        seed: Option<u64>,

        /// Zero-based model index
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Indent the document
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the lightweight display rows
    Items {
        /// Number of rows
        #[arg(short, long, default_value_t = sizes::DISPLAY_ITEMS)]
        count: usize,

        /// Seed for reproducible rows
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
}

impl InspectCommands {
    /// Execute the inspection command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if generation, rendering or output fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            InspectCommands::Sample {
                seed,
                index,
                pretty,
            } => commands::sample(seed, index, pretty).map(|_| ()),
            InspectCommands::Items { count, seed, json } => {
                commands::items(count, seed, json).map(|_| ())
            }
        }
    }
}
