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

//! Lightweight display rows.
//!
//! The list that sits next to the heavy workload: cheap records whose only
//! purpose is to be scrolled while a benchmark runs.

use crate::datasets::SeedPolicy;
use rand::Rng;
use serde::Serialize;
use std::fmt;

const ADJECTIVES: [&str; 10] = [
    "Amazing",
    "Brilliant",
    "Creative",
    "Dynamic",
    "Elegant",
    "Fantastic",
    "Gorgeous",
    "Incredible",
    "Magnificent",
    "Outstanding",
];

const NOUNS: [&str; 10] = [
    "Project",
    "Task",
    "Item",
    "Element",
    "Component",
    "Feature",
    "Module",
    "Section",
    "Part",
    "Piece",
];

/// Named colors used by display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Swatch {
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
    Pink,
    Brown,
    White,
    /// Light grey used for odd row backgrounds.
    Mist,
}

impl Swatch {
    /// Foreground swatches rows draw from.
    pub const FOREGROUND: [Swatch; 8] = [
        Swatch::Red,
        Swatch::Blue,
        Swatch::Green,
        Swatch::Purple,
        Swatch::Orange,
        Swatch::Teal,
        Swatch::Pink,
        Swatch::Brown,
    ];

    /// RGBA components.
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            Swatch::Red => [255, 0, 0, 255],
            Swatch::Blue => [0, 0, 255, 255],
            Swatch::Green => [0, 128, 0, 255],
            Swatch::Purple => [128, 0, 128, 255],
            Swatch::Orange => [255, 165, 0, 255],
            Swatch::Teal => [0, 128, 128, 255],
            Swatch::Pink => [255, 192, 203, 255],
            Swatch::Brown => [165, 42, 42, 255],
            Swatch::White => [255, 255, 255, 255],
            Swatch::Mist => [240, 240, 240, 255],
        }
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rgba();
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// One row of the display list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    /// e.g. `Dynamic Module #12`
    pub title: String,
    /// e.g. `Item 012`
    pub number: String,
    /// Text color.
    pub color: Swatch,
    /// Alternating row background.
    pub background: Swatch,
}

/// Generate `count` display rows numbered from 1.
pub fn generate_display_items(count: usize, seed: SeedPolicy) -> Vec<DisplayItem> {
    let mut rng = seed.rng();
    (1..=count)
        .map(|i| {
            let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
            let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
            let color = Swatch::FOREGROUND[rng.gen_range(0..Swatch::FOREGROUND.len())];
            DisplayItem {
                title: format!("{} {} #{}", adjective, noun, i),
                number: format!("Item {:03}", i),
                color,
                background: if i % 2 == 0 { Swatch::White } else { Swatch::Mist },
            }
        })
        .collect()
}
