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

//! The unit of work a dispatcher runs off the main context.

use stallmark_bench::{BenchError, BenchmarkResult, Dataset, SerializationBenchmark};

/// A one-off CPU-bound job over a frozen dataset.
///
/// Implementations must not mutate the dataset; the dispatcher shares it
/// with the main context by reference count only.
pub trait Workload: Send + Sync + 'static {
    /// Run the job to completion on the calling thread.
    fn execute(&self, dataset: &Dataset) -> Result<BenchmarkResult, BenchError>;
}

impl Workload for SerializationBenchmark {
    fn execute(&self, dataset: &Dataset) -> Result<BenchmarkResult, BenchError> {
        self.run(dataset)
    }
}

impl<F> Workload for F
where
    F: Fn(&Dataset) -> Result<BenchmarkResult, BenchError> + Send + Sync + 'static,
{
    fn execute(&self, dataset: &Dataset) -> Result<BenchmarkResult, BenchError> {
        self(dataset)
    }
}
