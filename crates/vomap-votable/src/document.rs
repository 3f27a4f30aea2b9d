// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Owned element tree of an annotated document.
//!
//! The XML text is parsed once with `roxmltree` and copied into a pre-order
//! arena, so [`ElementId`] order is document order and the descendants of an
//! element form one contiguous id range.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::vocab::ID_ATTR;

/// Index of an element in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    /// Document-order position.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn at(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// Errors raised while loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not well-formed XML.
    #[error("[DOC_XML] malformed document: {0}")]
    Xml(#[from] roxmltree::Error),
    /// The file could not be read.
    #[error("[DOC_IO] cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

#[derive(Debug)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// One past the last descendant.
    end: usize,
}

/// Parsed document: elements, attributes and text, addressed by [`ElementId`].
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    ids: HashMap<String, ElementId>,
}

impl Document {
    /// Parses XML text.
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let parsed = roxmltree::Document::parse(xml)?;
        let mut nodes: Vec<Node> = Vec::new();
        let mut ids = HashMap::new();

        let mut stack = vec![(parsed.root_element(), None::<ElementId>)];
        while let Some((node, parent)) = stack.pop() {
            let id = ElementId::at(nodes.len());
            let attrs: Vec<(String, String)> = node
                .attributes()
                .map(|a| (a.name().to_owned(), a.value().to_owned()))
                .collect();
            if let Some((_, value)) = attrs.iter().find(|(k, _)| k == ID_ATTR) {
                ids.entry(value.clone()).or_insert(id);
            }
            let text: String = node
                .children()
                .filter(roxmltree::Node::is_text)
                .filter_map(|t| t.text())
                .collect();
            nodes.push(Node {
                tag: node.tag_name().name().to_owned(),
                attrs,
                text: text.trim().to_owned(),
                parent,
                children: Vec::new(),
                end: 0,
            });
            if let Some(p) = parent {
                nodes[p.index()].children.push(id);
            }
            let kids: Vec<_> = node.children().filter(roxmltree::Node::is_element).collect();
            for child in kids.into_iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        for i in (0..nodes.len()).rev() {
            let end = nodes[i]
                .children
                .last()
                .map_or(i + 1, |last| nodes[last.index()].end);
            nodes[i].end = end;
        }

        tracing::debug!(elements = nodes.len(), ids = ids.len(), "document parsed");
        Ok(Self { nodes, ids })
    }

    /// Reads and parses a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&xml)
    }

    fn node(&self, e: ElementId) -> Option<&Node> {
        self.nodes.get(e.index())
    }

    /// The document element.
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` for a document without elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Local tag name.
    pub fn tag(&self, e: ElementId) -> &str {
        self.node(e).map_or("", |n| n.tag.as_str())
    }

    /// Returns `true` when `e` has local name `tag`.
    pub fn is(&self, e: ElementId, tag: &str) -> bool {
        self.tag(e) == tag
    }

    /// Attribute value by local name.
    pub fn attr(&self, e: ElementId, name: &str) -> Option<&str> {
        self.node(e)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct text content, trimmed.
    pub fn text(&self, e: ElementId) -> &str {
        self.node(e).map_or("", |n| n.text.as_str())
    }

    /// Parent element.
    pub fn parent(&self, e: ElementId) -> Option<ElementId> {
        self.node(e)?.parent
    }

    /// Child elements in document order.
    pub fn children(&self, e: ElementId) -> &[ElementId] {
        self.node(e).map_or(&[], |n| n.children.as_slice())
    }

    /// Child elements named `tag`.
    pub fn children_named<'a>(
        &'a self,
        e: ElementId,
        tag: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        self.children(e)
            .iter()
            .copied()
            .filter(move |c| self.is(*c, tag))
    }

    /// First child element named `tag`.
    pub fn first_child(&self, e: ElementId, tag: &str) -> Option<ElementId> {
        self.children_named(e, tag).next()
    }

    /// Every descendant of `e` in document order (excluding `e`).
    pub fn descendants(&self, e: ElementId) -> impl Iterator<Item = ElementId> {
        let end = self.node(e).map_or(0, |n| n.end);
        (e.index() + 1..end).map(ElementId::at)
    }

    /// Ancestors of `e`, nearest first.
    pub fn ancestors(&self, e: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.parent(e), move |p| self.parent(*p))
    }

    /// Returns `true` when some ancestor of `e` is named `tag`.
    pub fn has_ancestor(&self, e: ElementId, tag: &str) -> bool {
        self.ancestors(e).any(|a| self.is(a, tag))
    }

    /// Every element in document order.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> {
        (0..self.nodes.len()).map(ElementId::at)
    }

    /// Every element named `tag` in document order.
    pub fn elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementId> + 'a {
        self.elements().filter(move |e| self.is(*e, tag))
    }

    /// First element (in document order) whose `ID` is `id`.
    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).copied()
    }
}
