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

//! Full-dataset serialization benchmark.
//!
//! One run renders every model of a dataset, in dataset order, keeps every
//! document alive until the pass ends, and reports the summed length and the
//! wall time of the whole pass. The pass is CPU-bound and
//! allocation-heavy.

use crate::datasets::Dataset;
use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use stallmark_xml::{serialize_document, ToXmlConfig};
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Wall time of the whole pass.
    pub elapsed: Duration,
    /// Sum of rendered document lengths, in UTF-8 bytes.
    pub total_length: usize,
    /// Number of models serialized.
    pub object_count: usize,
}

impl BenchmarkResult {
    /// Average document length, 0 for an empty run.
    pub fn average_length(&self) -> usize {
        self.total_length.checked_div(self.object_count).unwrap_or(0)
    }

    /// Output throughput in MB/s, if any time elapsed.
    pub fn throughput_mbs(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.total_length as f64 / 1_000_000.0 / secs)
    }

    /// Multi-line completion summary.
    pub fn summary(&self) -> String {
        format!(
            "Serialized {} objects with length: {}\nTook {:.2} seconds",
            self.object_count,
            self.total_length,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Renders whole datasets and measures the pass.
#[derive(Debug, Clone, Default)]
pub struct SerializationBenchmark {
    config: ToXmlConfig,
}

impl SerializationBenchmark {
    /// Benchmark rendering with the given output configuration.
    pub fn new(config: ToXmlConfig) -> Self {
        Self { config }
    }

    /// Output configuration.
    pub fn config(&self) -> &ToXmlConfig {
        &self.config
    }

    /// Serialize every model and report the pass.
    ///
    /// The first failing model aborts the run; no partial result is
    /// returned.
    pub fn run(&self, dataset: &Dataset) -> Result<BenchmarkResult> {
        let start = Instant::now();

        let documents = dataset
            .iter()
            .map(|model| {
                serialize_document(model, &self.config).map_err(|e| {
                    BenchError::SerializationFailed {
                        model_id: model.id,
                        message: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<String>>>()?;
        let total_length = documents.iter().map(String::len).sum();

        let elapsed = start.elapsed();
        drop(documents);

        let result = BenchmarkResult {
            elapsed,
            total_length,
            object_count: dataset.len(),
        };
        debug!(
            objects = result.object_count,
            total_length = result.total_length,
            elapsed_ms = elapsed.as_millis() as u64,
            "serialized dataset"
        );
        Ok(result)
    }
}
