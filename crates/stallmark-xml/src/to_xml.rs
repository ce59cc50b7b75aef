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

//! Node tree to XML conversion

use crate::error::{Result, XmlError};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use stallmark_core::{Node, ToNode};
use std::io::Write;

/// Configuration for XML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToXmlConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set
    pub indent_size: usize,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_size: 2,
        }
    }
}

impl ToXmlConfig {
    /// Indented output for human inspection.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Sets the indentation width.
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }
}

/// Build a record's node and render it as a document.
pub fn serialize_document<T: ToNode + ?Sized>(value: &T, config: &ToXmlConfig) -> Result<String> {
    to_markup(&value.to_node(), config)
}

/// Render a node tree to an XML string.
pub fn to_markup(node: &Node, config: &ToXmlConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_capacity(node));
    render(node, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|e| XmlError::InvalidUtf8(e.to_string()))
}

/// Render a node tree into any writer.
pub fn render<W: Write>(node: &Node, out: W, config: &ToXmlConfig) -> Result<()> {
    if config.pretty {
        let mut writer = Writer::new_with_indent(out, b' ', config.indent_size);
        write_node(&mut writer, node)
    } else {
        let mut writer = Writer::new(out);
        write_node(&mut writer, node)
    }
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<()> {
    let mut elem = BytesStart::new(node.name());
    for attr in node.attributes() {
        // Attribute values go through full escaping, quotes included.
        elem.push_attribute((&*attr.name, attr.value.as_str()));
    }

    if node.is_empty() {
        return writer
            .write_event(Event::Empty(elem))
            .map_err(|e| XmlError::write(format!("empty element <{}>", node.name()), e));
    }

    writer
        .write_event(Event::Start(elem))
        .map_err(|e| XmlError::write(format!("start element <{}>", node.name()), e))?;

    if let Some(text) = node.text() {
        write_text(writer, text)?;
    }

    for child in node.children() {
        write_node(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(node.name())))
        .map_err(|e| XmlError::write(format!("end element </{}>", node.name()), e))
}

fn write_text<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    // Only markup-significant characters are escaped; everything else,
    // control characters included, is written as-is.
    writer
        .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
        .map_err(|e| XmlError::write("text", e))
}

/// Rough output size, to avoid regrowing the buffer on typical documents.
fn estimate_capacity(node: &Node) -> usize {
    let tags = node.name().len() * 2 + 5;
    let attrs: usize = node
        .attributes()
        .iter()
        .map(|a| a.name.len() + a.value.len() + 4)
        .sum();
    let text = node.text().map_or(0, str::len);
    tags + attrs + text + node.children().iter().map(estimate_capacity).sum::<usize>()
}
