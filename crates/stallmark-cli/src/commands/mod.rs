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

//! CLI command implementations

mod bench;
mod items;
mod run;
mod sample;

pub use bench::{bench, BenchOptions};
pub use items::items;
pub use run::{run, RunOptions, RunReport};
pub use sample::sample;

use crate::error::CliError;
use serde::Serialize;
use stallmark_bench::{Dataset, DemoConfig, SeedPolicy};
use tracing::info;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build the demo configuration shared by the workload commands.
pub(crate) fn demo_config(size: i64, seed: Option<u64>) -> DemoConfig {
    DemoConfig::default()
        .with_dataset_size(size)
        .with_seed(SeedPolicy::from(seed))
}

/// Generate the dataset once, before any run starts.
pub(crate) fn build_dataset(config: &DemoConfig) -> Result<Dataset, CliError> {
    let dataset = config.build_dataset()?;
    info!(
        requested = config.dataset_size,
        models = dataset.len(),
        "dataset generated"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_config_from_flags() {
        let config = demo_config(12, Some(4));
        assert_eq!(config.dataset_size, 12);
        assert_eq!(config.seed, SeedPolicy::Fixed(4));
        assert_eq!(demo_config(1, None).seed, SeedPolicy::Entropy);
    }

    #[test]
    fn test_negative_size_builds_empty_dataset() {
        let dataset = build_dataset(&demo_config(-3, Some(1))).unwrap();
        assert!(dataset.is_empty());
    }
}
