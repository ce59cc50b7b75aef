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

//! Structured error types for the stallmark CLI.

use stallmark_bench::BenchError;
use stallmark_dispatch::DispatchError;
use stallmark_xml::XmlError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// Generation or benchmarking failed.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// The dispatcher could not be set up.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Rendering a sample document failed.
    #[error("Render error: {0}")]
    Render(#[from] XmlError),

    /// JSON report serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// A requested record does not exist.
    #[error("No model at index {index} (dataset has {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Dataset length
        len: usize,
    },

    /// One or more runs ended in failure.
    #[error("{failed} of {total} runs failed")]
    RunsFailed {
        /// Failed runs
        failed: usize,
        /// Runs attempted
        total: usize,
    },
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::JsonFormat {
            message: err.to_string(),
        }
    }
}
