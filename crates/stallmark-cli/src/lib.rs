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

//! Stallmark CLI library.
//!
//! Command implementations behind the `stallmark` binary:
//!
//! - **run**: generate the dataset, drive the main loop, hand runs to a
//!   worker and report frame pacing (`--inline` runs on the loop instead)
//! - **bench**: repeat the serialization pass and print statistics
//! - **sample**: print one rendered `SampleData` document
//! - **items**: print the lightweight display rows
//!
//! # Examples
//!
//! ```no_run
//! use stallmark_cli::commands::{run, RunOptions};
//!
//! # fn main() -> Result<(), stallmark_cli::error::CliError> {
//! let report = run(&RunOptions {
//!     size: 5_000,
//!     ..RunOptions::default()
//! })?;
//! println!("late frames: {}", report.late_frames);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
