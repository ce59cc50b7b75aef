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

//! Stallmark Benchmark Framework
//!
//! Builds the synthetic dataset and measures how long it takes to serialize
//! all of it in one synchronous pass.
//!
//! ## Features
//!
//! - **Dataset generator**: tens of thousands of [`SampleModel`] records
//!   with randomized shape
//! - **Serialization benchmark**: renders every record in order, sums the
//!   output length, times the whole pass
//! - **Display items**: the lightweight list rows shown next to the workload
//!
//! ## Usage
//!
//! ```rust
//! use stallmark_bench::{DatasetGenerator, SeedPolicy, SerializationBenchmark};
//!
//! let dataset = DatasetGenerator::new()
//!     .with_seed(SeedPolicy::Fixed(7))
//!     .generate(25)?;
//!
//! let result = SerializationBenchmark::default().run(&dataset)?;
//! assert_eq!(result.object_count, 25);
//! # Ok::<(), stallmark_bench::BenchError>(())
//! ```
//!
//! Run the criterion benchmarks:
//! ```bash
//! cargo bench --package stallmark-bench
//! ```
//!
//! [`SampleModel`]: stallmark_core::SampleModel

pub mod benchmark;
pub mod config;
pub mod datasets;
pub mod display;
pub mod error;
pub mod measurement;

pub use benchmark::{BenchmarkResult, SerializationBenchmark};
pub use config::DemoConfig;
pub use datasets::{
    dedup_preserving_order, generate_dataset, generate_with_rng, Dataset, DatasetGenerator,
    SeedPolicy, CATEGORIES, DESCRIPTIONS,
};
pub use display::{generate_display_items, DisplayItem, Swatch};
pub use error::{resolve_dataset_size, validate_dataset_size, BenchError, Result, MAX_DATASET_SIZE};
pub use measurement::{compute_statistics, measure_runs, RunStatistics, Statistics};

/// Standard dataset sizes
pub mod sizes {
    /// Small dataset for quick checks
    pub const SMALL: usize = 10;
    /// Medium dataset
    pub const MEDIUM: usize = 1_000;
    /// Reference workload: large enough to stall a UI thread for seconds
    pub const REFERENCE: usize = 40_000;
    /// Number of lightweight display rows
    pub const DISPLAY_ITEMS: usize = 200;
}
