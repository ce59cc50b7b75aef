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

//! Items command - print the display list.

use super::print_json;
use crate::error::CliError;
use colored::{Color, Colorize};
use stallmark_bench::{DemoConfig, DisplayItem, SeedPolicy, Swatch};

/// Print `count` display rows, as a list or as JSON.
///
/// # Errors
///
/// Returns `Err` only if JSON output fails.
pub fn items(count: usize, seed: Option<u64>, json: bool) -> Result<Vec<DisplayItem>, CliError> {
    let items = DemoConfig::default()
        .with_display_items(count)
        .with_seed(SeedPolicy::from(seed))
        .build_display_items();

    if json {
        print_json(&items)?;
    } else {
        for item in &items {
            let [r, g, b, _] = item.color.rgba();
            println!(
                "{}  {:<28} {} on {}",
                item.number,
                item.title.color(Color::TrueColor { r, g, b }),
                item.color,
                background_label(item.background)
            );
        }
    }

    Ok(items)
}

fn background_label(swatch: Swatch) -> &'static str {
    match swatch {
        Swatch::Mist => "mist",
        _ => "white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_count() {
        let items = items(5, Some(1), true).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[4].number, "Item 005");
    }

    #[test]
    fn test_default_count_matches_demo_config() {
        let count = DemoConfig::default().display_items;
        let items = items(count, Some(1), true).unwrap();
        assert_eq!(items.len(), stallmark_bench::sizes::DISPLAY_ITEMS);
    }

    #[test]
    fn test_background_label() {
        assert_eq!(background_label(Swatch::Mist), "mist");
        assert_eq!(background_label(Swatch::White), "white");
    }
}
