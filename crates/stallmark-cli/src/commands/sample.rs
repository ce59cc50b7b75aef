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

//! Sample command - print one rendered document.

use crate::error::CliError;
use stallmark_bench::{DatasetGenerator, SeedPolicy};
use stallmark_xml::{serialize_document, ToXmlConfig};

/// Render the model at `index` (0-based) of a generated dataset.
///
/// Generation is sequential, so with a fixed seed the model at a given
/// index is the same no matter how large the dataset.
///
/// # Errors
///
/// Returns `Err` if generation or rendering fails.
pub fn sample(seed: Option<u64>, index: usize, pretty: bool) -> Result<String, CliError> {
    let count = index.saturating_add(1);
    let dataset = DatasetGenerator::new()
        .with_seed(SeedPolicy::from(seed))
        .generate(count)?;
    let model = dataset.get(index).ok_or(CliError::IndexOutOfRange {
        index,
        len: dataset.len(),
    })?;

    let config = if pretty {
        ToXmlConfig::pretty()
    } else {
        ToXmlConfig::default()
    };
    let document = serialize_document(model, &config)?;
    println!("{}", document);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_stable_for_fixed_seed() {
        let first = sample(Some(8), 3, false).unwrap();
        let second = sample(Some(8), 3, false).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("<SampleData><Id>4</Id>"));
    }

    #[test]
    fn test_pretty_sample_has_newlines() {
        let document = sample(Some(8), 0, true).unwrap();
        assert!(document.contains("\n  <Id>1</Id>"));
    }
}
