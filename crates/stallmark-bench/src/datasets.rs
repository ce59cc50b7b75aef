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

//! Dataset generator for the serialization workload
//!
//! Fabricates [`SampleModel`] records with randomized shape: tag counts,
//! property counts, property variants and sub-item counts all vary per
//! record. The default [`SeedPolicy::Entropy`] reseeds on every
//! generation, so two datasets of the same size differ in content.
//!
//! All generator entry points validate the requested size against
//! [`MAX_DATASET_SIZE`](crate::error::MAX_DATASET_SIZE).

use crate::error::{resolve_dataset_size, validate_dataset_size, BenchError, Result};
use chrono::{Local, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stallmark_core::{
    truncate_to_ticks, NestedObject, Price, Property, PropertyValue, SampleModel, SubItem,
    Timestamp,
};
use std::collections::HashSet;
use std::ops::Range;
use tracing::{debug, warn};

/// Category vocabulary shared by tags and sub-items.
pub const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Books",
    "Clothing",
    "Home",
    "Sports",
    "Toys",
    "Food",
    "Health",
];

/// Descriptions for nested objects.
pub const DESCRIPTIONS: [&str; 6] = [
    "High-quality product with excellent features",
    "Premium item for discerning customers",
    "Essential everyday item",
    "Professional grade equipment",
    "Budget-friendly option",
    "Luxury premium product",
];

const TAG_DRAWS: Range<usize> = 3..8;
const PROPERTY_COUNT: Range<usize> = 5..15;
const SUB_ITEM_COUNT: Range<usize> = 5..20;
const CREATED_DAYS_AGO: Range<i64> = 0..365;

/// Anchor used by fixed seeds when none is set: 2025-01-01T00:00:00Z.
const FIXED_SEED_ANCHOR_SECS: i64 = 1_735_689_600;

/// How the generator seeds its random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Fresh OS entropy on every generation.
    #[default]
    Entropy,
    /// Fixed seed, for repeatable datasets.
    Fixed(u64),
}

impl SeedPolicy {
    /// Default "now" that creation dates count back from.
    ///
    /// Entropy seeding reads the local clock; a fixed seed uses a constant
    /// anchor so the whole dataset, dates included, is repeatable.
    pub fn default_anchor(&self) -> Timestamp {
        match self {
            SeedPolicy::Entropy => Local::now().into(),
            SeedPolicy::Fixed(_) => Utc
                .timestamp_opt(FIXED_SEED_ANCHOR_SECS, 0)
                .single()
                .unwrap_or_default()
                .into(),
        }
    }

    /// Build the random source for one generation.
    pub fn rng(&self) -> StdRng {
        match self {
            SeedPolicy::Entropy => StdRng::from_entropy(),
            SeedPolicy::Fixed(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

impl From<Option<u64>> for SeedPolicy {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed)
    }
}

/// An ordered, frozen sequence of models.
///
/// Exposes no mutable access: once generated, a dataset only gets read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    models: Vec<SampleModel>,
}

impl Dataset {
    /// Wrap an already built sequence.
    pub fn from_models(models: Vec<SampleModel>) -> Self {
        Self { models }
    }

    /// Number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when the dataset holds no models.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models in dataset order.
    pub fn models(&self) -> &[SampleModel] {
        &self.models
    }

    /// Iterate in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, SampleModel> {
        self.models.iter()
    }

    /// Model at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SampleModel> {
        self.models.get(index)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SampleModel;
    type IntoIter = std::slice::Iter<'a, SampleModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

/// Builder-style dataset generator.
///
/// # Example
///
/// ```
/// use stallmark_bench::{DatasetGenerator, SeedPolicy};
///
/// let dataset = DatasetGenerator::new()
///     .with_seed(SeedPolicy::Fixed(42))
///     .generate(10)?;
/// assert_eq!(dataset.len(), 10);
/// assert_eq!(dataset.get(0).map(|m| m.id), Some(1));
/// # Ok::<(), stallmark_bench::BenchError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetGenerator {
    seed: SeedPolicy,
    anchor: Option<Timestamp>,
}

impl DatasetGenerator {
    /// Generator with entropy seeding, anchored at the local clock.
    ///
    /// With [`SeedPolicy::Fixed`] and no explicit anchor, the anchor is
    /// constant and generation is fully repeatable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed policy.
    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the "now" that creation dates count back from.
    pub fn with_anchor(mut self, anchor: Timestamp) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Generate `count` models with ids `1..=count`.
    pub fn generate(&self, count: usize) -> Result<Dataset> {
        validate_dataset_size(count)?;
        let anchor = self.anchor.unwrap_or_else(|| self.seed.default_anchor());
        let mut rng = self.seed.rng();
        let dataset = generate_with_rng(&mut rng, count, anchor)?;
        debug!(count = dataset.len(), seed = ?self.seed, "generated dataset");
        Ok(dataset)
    }

    /// Generate from an unvalidated, signed size.
    ///
    /// A negative size is logged and yields an empty dataset; sizes beyond
    /// the maximum still fail.
    pub fn generate_requested(&self, requested: i64) -> Result<Dataset> {
        match resolve_dataset_size(requested) {
            Ok(count) => self.generate(count),
            Err(err @ BenchError::InvalidArgument { .. }) => {
                warn!(requested, error = %err, "using empty dataset");
                Ok(Dataset::default())
            }
            Err(err) => Err(err),
        }
    }
}

/// Generate `count` models with the given seed policy.
pub fn generate_dataset(count: usize, seed: SeedPolicy) -> Result<Dataset> {
    DatasetGenerator::new().with_seed(seed).generate(count)
}

/// Generate `count` models from an explicit random source.
///
/// Creation dates lie in the 365 days before `anchor`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    anchor: Timestamp,
) -> Result<Dataset> {
    validate_dataset_size(count)?;
    let anchor = truncate_to_ticks(anchor);

    let mut models = Vec::with_capacity(count);
    for index in 1..=count {
        // MAX_DATASET_SIZE keeps ids well inside u32.
        let id = index as u32;
        models.push(generate_model(rng, id, anchor)?);
    }
    Ok(Dataset::from_models(models))
}

fn generate_model<R: Rng + ?Sized>(rng: &mut R, id: u32, anchor: Timestamp) -> Result<SampleModel> {
    let days_ago = rng.gen_range(CREATED_DAYS_AGO);
    let created_date = anchor - chrono::Duration::days(days_ago);

    let price =
        Price::from_f64(rng.gen::<f64>() * 1000.0).map_err(|e| BenchError::GenerationFailed {
            model_id: id,
            message: e.to_string(),
        })?;
    let is_active = rng.gen_bool(0.5);

    let draws = rng.gen_range(TAG_DRAWS);
    let tags = dedup_preserving_order((0..draws).map(|_| pick(rng, &CATEGORIES)));

    let property_count = rng.gen_range(PROPERTY_COUNT);
    let properties = (0..property_count)
        .map(|j| Property::new(format!("Property_{}", j), generate_property_value(rng)))
        .collect();

    let details = generate_nested(rng).map_err(|e| BenchError::GenerationFailed {
        model_id: id,
        message: e.to_string(),
    })?;

    Ok(SampleModel {
        id,
        name: format!("Product {:04}", id),
        created_date,
        price,
        is_active,
        tags,
        properties,
        details,
    })
}

fn generate_property_value<R: Rng + ?Sized>(rng: &mut R) -> PropertyValue {
    match rng.gen_range(0..3) {
        0 => PropertyValue::Int(rng.gen_range(1..1000)),
        1 => PropertyValue::Str(format!("StringValue_{}", rng.gen_range(1..100))),
        _ => PropertyValue::Float(rng.gen::<f64>() * 100.0),
    }
}

fn generate_nested<R: Rng + ?Sized>(rng: &mut R) -> stallmark_core::Result<NestedObject> {
    let description = pick(rng, &DESCRIPTIONS);
    let priority = rng.gen_range(1..=10);
    let item_count = rng.gen_range(SUB_ITEM_COUNT);
    let items = (0..item_count)
        .map(|_| {
            SubItem::new(
                format!("CODE_{}", rng.gen_range(1000..9999)),
                rng.gen::<f64>() * 1000.0,
                pick(rng, &CATEGORIES),
            )
        })
        .collect();
    NestedObject::new(description, priority, items)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&'static str]) -> &'static str {
    choices[rng.gen_range(0..choices.len())]
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn dedup_preserving_order<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(Into::into)
        .filter(|value: &String| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use rand::rngs::mock::StepRng;

    fn anchor() -> Timestamp {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 30, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_ids_are_sequential() {
        let dataset = generate_with_rng(&mut StdRng::seed_from_u64(1), 50, anchor()).unwrap();
        let ids: Vec<u32> = dataset.iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
        assert_eq!(dataset.get(8).unwrap().name, "Product 0009");
    }

    #[test]
    fn test_zero_count_is_empty() {
        let dataset = generate_dataset(0, SeedPolicy::Fixed(3)).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_negative_request_is_empty() {
        let dataset = DatasetGenerator::new().generate_requested(-5).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_oversized_request_fails() {
        let err = DatasetGenerator::new()
            .generate_requested(crate::MAX_DATASET_SIZE as i64 + 1)
            .unwrap_err();
        assert!(matches!(err, BenchError::DatasetTooLarge { .. }));
    }

    #[test]
    fn test_shape_ranges() {
        let dataset = generate_with_rng(&mut StdRng::seed_from_u64(99), 300, anchor()).unwrap();
        for model in &dataset {
            assert!((1..8).contains(&model.tags.len()), "tags: {:?}", model.tags);
            assert!(PROPERTY_COUNT.contains(&model.properties.len()));
            assert!(SUB_ITEM_COUNT.contains(&model.details.items.len()));
            assert!((1..=10).contains(&model.details.priority()));
            assert!(model.price.as_f64() <= 1000.0);
            assert!(model.created_date <= anchor());
            assert!(model.created_date > anchor() - chrono::Duration::days(365));
            assert!(DESCRIPTIONS.contains(&model.details.description.as_str()));
            for item in &model.details.items {
                assert!(CATEGORIES.contains(&item.category.as_str()));
                assert!(item.code.starts_with("CODE_"));
            }
        }
    }

    #[test]
    fn test_all_property_variants_appear() {
        let dataset = generate_with_rng(&mut StdRng::seed_from_u64(5), 100, anchor()).unwrap();
        let kinds: HashSet<&str> = dataset
            .iter()
            .flat_map(|m| m.properties.iter().map(|p| p.value.kind()))
            .collect();
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn test_constant_rng_degenerates_to_single_tag() {
        // A constant source always draws the first category.
        let mut rng = StepRng::new(0, 0);
        let dataset = generate_with_rng(&mut rng, 3, anchor()).unwrap();

        for model in &dataset {
            assert_eq!(model.tags, vec!["Electronics".to_string()]);
            assert_eq!(model.created_date, anchor());
        }
    }

    #[test]
    fn test_fixed_seed_is_repeatable() {
        let generator = DatasetGenerator::new()
            .with_seed(SeedPolicy::Fixed(77))
            .with_anchor(anchor());
        assert_eq!(generator.generate(20).unwrap(), generator.generate(20).unwrap());
    }

    #[test]
    fn test_fixed_seed_without_anchor_is_repeatable() {
        let generator = DatasetGenerator::new().with_seed(SeedPolicy::Fixed(8));
        let first = generator.generate(10).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = generator.generate(10).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.get(0).map(|m| m.created_date <= SeedPolicy::Fixed(8).default_anchor()),
            Some(true)
        );
    }

    #[test]
    fn test_fixed_anchor_is_constant() {
        let anchor = SeedPolicy::Fixed(1).default_anchor();
        assert_eq!(anchor, SeedPolicy::Fixed(2).default_anchor());
        assert_eq!(anchor.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_dedup_preserving_order() {
        let tags = dedup_preserving_order(["Toys", "Books", "Toys", "Food", "Books"]);
        assert_eq!(tags, ["Toys", "Books", "Food"]);
        assert!(dedup_preserving_order(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_seed_policy_from_option() {
        assert_eq!(SeedPolicy::from(Some(4)), SeedPolicy::Fixed(4));
        assert_eq!(SeedPolicy::from(None), SeedPolicy::Entropy);
    }
}
