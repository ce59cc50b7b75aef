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

//! Workload records and their node layouts.

use crate::error::{ModelError, Result};
use crate::node::{Node, ToNode};
use crate::value::{format_timestamp, Price, PropertyValue, Timestamp};
use crate::format_bool;

/// Leaf record owned by a [`NestedObject`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubItem {
    /// Item code, e.g. `CODE_4711`.
    pub code: String,
    /// Measured value.
    pub value: f64,
    /// Category name.
    pub category: String,
}

impl SubItem {
    /// Create a sub-item.
    pub fn new(code: impl Into<String>, value: f64, category: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value,
            category: category.into(),
        }
    }

    /// Serialize into a `SubItem` node.
    pub fn serialize(&self) -> Node {
        self.to_node()
    }
}

impl ToNode for SubItem {
    fn to_node(&self) -> Node {
        Node::new("SubItem").with_children([
            Node::leaf("Code", self.code.as_str()),
            Node::leaf("Value", self.value.to_string()),
            Node::leaf("Category", self.category.as_str()),
        ])
    }
}

/// Nested record owned by a [`SampleModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct NestedObject {
    /// Free-text description.
    pub description: String,
    priority: u8,
    /// Sub-items in serialization order.
    pub items: Vec<SubItem>,
}

impl NestedObject {
    /// Create a nested object. `priority` must lie in `1..=10`.
    pub fn new(description: impl Into<String>, priority: u8, items: Vec<SubItem>) -> Result<Self> {
        if !(1..=10).contains(&priority) {
            return Err(ModelError::PriorityOutOfRange(priority));
        }
        Ok(Self {
            description: description.into(),
            priority,
            items,
        })
    }

    /// Priority in `1..=10`.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Serialize into a `NestedObject` node.
    pub fn serialize(&self) -> Node {
        self.to_node()
    }
}

impl ToNode for NestedObject {
    fn to_node(&self) -> Node {
        Node::new("NestedObject").with_children([
            Node::leaf("Description", self.description.as_str()),
            Node::leaf("Priority", self.priority.to_string()),
            Node::new("Items").with_children(self.items.iter().map(SubItem::to_node)),
        ])
    }
}

/// One entry of a model's property list.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property key, unique within its model.
    pub key: String,
    /// Property value.
    pub value: PropertyValue,
}

impl Property {
    /// Create a property.
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The heavy record of the serialization workload.
///
/// Created once by the dataset generator and read-only afterwards.
/// `tags` holds distinct values and `properties` distinct keys; the
/// generator guarantees both, serialization does not re-check them.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleModel {
    /// 1-based sequential id within a dataset.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Creation timestamp, fixed at generation time.
    pub created_date: Timestamp,
    /// Non-negative price.
    pub price: Price,
    /// Activity flag.
    pub is_active: bool,
    /// Distinct tags in first-seen order.
    pub tags: Vec<String>,
    /// Properties in insertion order.
    pub properties: Vec<Property>,
    /// The owned nested object.
    pub details: NestedObject,
}

impl SampleModel {
    /// Look up a property value by key.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    /// Serialize into a `SampleData` document root.
    pub fn serialize(&self) -> Node {
        self.to_node()
    }
}

impl ToNode for SampleModel {
    fn to_node(&self) -> Node {
        let tags = self
            .tags
            .iter()
            .map(|tag| Node::leaf("Tag", tag.as_str()));

        let properties = self.properties.iter().map(|p| {
            Node::new("Property")
                .with_attribute("Key", p.key.as_str())
                .with_attribute("Value", p.value.to_string())
        });

        Node::new("SampleData").with_children([
            Node::leaf("Id", self.id.to_string()),
            Node::leaf("Name", self.name.as_str()),
            Node::leaf("CreatedDate", format_timestamp(&self.created_date)),
            Node::leaf("Price", self.price.to_string()),
            Node::leaf("IsActive", format_bool(self.is_active)),
            Node::new("Tags").with_children(tags),
            Node::new("Properties").with_children(properties),
            Node::new("Details").with_child(self.details.to_node()),
        ])
    }
}
