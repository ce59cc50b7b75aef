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

//! Status line shown next to the trigger.

use crate::dispatcher::Completion;
use stallmark_bench::{BenchError, BenchmarkResult};
use std::fmt;

/// Text shown while a run is in flight.
pub const RUNNING_TEXT: &str = "XML Serialization Running - Watch for Jitter!";

/// What the presentation layer should show.
#[derive(Debug, Clone, PartialEq)]
pub enum RunStatus {
    /// Nothing has run yet.
    Ready,
    /// A run is in flight.
    Running,
    /// The last run finished.
    Completed(BenchmarkResult),
    /// The last run was abandoned.
    Failed(BenchError),
}

/// Colour hint for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Default text colour.
    Neutral,
    /// Work in progress; the main loop should be watched.
    Alert,
    /// Run finished.
    Success,
    /// Run failed.
    Error,
}

impl RunStatus {
    /// Colour hint.
    pub fn tone(&self) -> StatusTone {
        match self {
            RunStatus::Ready => StatusTone::Neutral,
            RunStatus::Running => StatusTone::Alert,
            RunStatus::Completed(_) => StatusTone::Success,
            RunStatus::Failed(_) => StatusTone::Error,
        }
    }

    /// Whether a run has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(self, RunStatus::Completed(_) | RunStatus::Failed(_))
    }
}

impl From<&Completion> for RunStatus {
    fn from(completion: &Completion) -> Self {
        match &completion.outcome {
            Ok(result) => RunStatus::Completed(*result),
            Err(err) => RunStatus::Failed(err.clone()),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Ready => f.write_str("Ready"),
            RunStatus::Running => f.write_str(RUNNING_TEXT),
            RunStatus::Completed(result) => {
                write!(f, "XML Serialization Completed\n{}", result.summary())
            }
            RunStatus::Failed(err) => write!(f, "XML Serialization Failed\n{}", err),
        }
    }
}
