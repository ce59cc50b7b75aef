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

//! Centralized demo configuration.
//!
//! Holds the knobs the workload exposes: dataset size, display row count,
//! seeding and output format.

use crate::datasets::{Dataset, DatasetGenerator, SeedPolicy};
use crate::display::{generate_display_items, DisplayItem};
use crate::error::Result;
use crate::sizes;
use stallmark_xml::ToXmlConfig;

/// Configuration for one demo session.
///
/// # Example
///
/// ```
/// use stallmark_bench::{DemoConfig, SeedPolicy};
///
/// let config = DemoConfig::default()
///     .with_dataset_size(500)
///     .with_seed(SeedPolicy::Fixed(1));
/// assert_eq!(config.dataset_size, 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Requested number of heavy models; negative values mean "none".
    pub dataset_size: i64,
    /// Number of lightweight display rows.
    pub display_items: usize,
    /// Seeding for both generators.
    pub seed: SeedPolicy,
    /// Markup output options.
    pub xml: ToXmlConfig,
}

impl DemoConfig {
    /// Sets the dataset size.
    pub fn with_dataset_size(mut self, dataset_size: i64) -> Self {
        self.dataset_size = dataset_size;
        self
    }

    /// Sets the display row count.
    pub fn with_display_items(mut self, display_items: usize) -> Self {
        self.display_items = display_items;
        self
    }

    /// Sets the seed policy.
    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the markup output options.
    pub fn with_xml(mut self, xml: ToXmlConfig) -> Self {
        self.xml = xml;
        self
    }

    /// Generate the heavy dataset this configuration describes.
    pub fn build_dataset(&self) -> Result<Dataset> {
        DatasetGenerator::new()
            .with_seed(self.seed)
            .generate_requested(self.dataset_size)
    }

    /// Generate the display rows this configuration describes.
    pub fn build_display_items(&self) -> Vec<DisplayItem> {
        generate_display_items(self.display_items, self.seed)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dataset_size: sizes::REFERENCE as i64,
            display_items: sizes::DISPLAY_ITEMS,
            seed: SeedPolicy::Entropy,
            xml: ToXmlConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.dataset_size, 40_000);
        assert_eq!(config.display_items, 200);
        assert_eq!(config.seed, SeedPolicy::Entropy);
        assert!(!config.xml.pretty);
    }

    #[test]
    fn test_build_from_config() {
        let config = DemoConfig::default()
            .with_dataset_size(12)
            .with_display_items(4)
            .with_seed(SeedPolicy::Fixed(3));
        assert_eq!(config.build_dataset().unwrap().len(), 12);
        assert_eq!(config.build_display_items().len(), 4);
    }

    #[test]
    fn test_negative_size_builds_empty_dataset() {
        let config = DemoConfig::default().with_dataset_size(-10);
        assert!(config.build_dataset().unwrap().is_empty());
    }

    #[test]
    fn test_with_xml() {
        let config = DemoConfig::default().with_xml(ToXmlConfig::pretty());
        assert!(config.xml.pretty);
    }
}
