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

//! Error types for the dispatcher.

use thiserror::Error;

/// Result type for dispatcher setup.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors raised while setting up a dispatcher.
///
/// Run failures are not errors of the dispatcher; they arrive as a
/// [`Completion`](crate::Completion) carrying a
/// [`BenchError`](stallmark_bench::BenchError).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The dedicated worker pool could not be built.
    #[error("Failed to build worker pool: {0}")]
    PoolBuild(String),

    /// A pool was requested with no threads.
    #[error("Worker pool needs at least one thread")]
    NoWorkers,
}

impl From<rayon::ThreadPoolBuildError> for DispatchError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        DispatchError::PoolBuild(err.to_string())
    }
}
