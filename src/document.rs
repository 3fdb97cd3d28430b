//! The host document.
//!
//! A [`Document`] owns the node arena behind a `RefCell` so any number of
//! [`Dome`] collections can share it and mutate it through `&self`. Each
//! primitive below borrows the arena only for its own duration.

use std::cell::RefCell;
use std::fmt;

use tracing::debug;

use crate::dom::serialize;
use crate::dom::tree_sink::{parse_fragment, parse_html};
use crate::dom::{NodeArena, NodeData, NodeId, SelectorQuery};
use crate::dome::Dome;
use crate::error::Result;
use crate::select::{self, Target};
use crate::util;

/// Where `insert` places a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Last,
    First,
}

/// An HTML document that collections query and mutate.
pub struct Document {
    arena: RefCell<NodeArena>,
}

impl Document {
    /// An empty `html`/`head`/`body` document.
    pub fn new() -> Self {
        Self::parse("")
    }

    /// Parse an HTML string. Malformed markup is repaired the way browsers
    /// repair it; parsing never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            arena: RefCell::new(parse_html(html)),
        }
    }

    /// Parse HTML bytes, honoring a declared charset when the input is not
    /// valid UTF-8.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        let hint = util::extract_charset(bytes);
        let text = util::decode_text(bytes, hint);
        Self::parse(&text)
    }

    /// Select elements. See [`select::get`].
    pub fn get<'a>(&self, target: impl Into<Target<'a>>) -> Result<Dome<'_>> {
        select::get(self, target)
    }

    /// Create a detached element with attributes. See [`select::create`].
    pub fn create<I, K, V>(&self, tag: &str, attributes: I) -> Dome<'_>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        select::create(self, tag, attributes)
    }

    /// Create a detached element with no attributes.
    pub fn create_element(&self, tag: &str) -> Dome<'_> {
        let id = self.arena.borrow_mut().create_html_element(tag);
        Dome::new(self, vec![id])
    }

    /// Parse markup into detached nodes, wrapped as a collection.
    pub fn fragment(&self, html: &str) -> Dome<'_> {
        Dome::new(self, self.import_fragment(html))
    }

    /// Elements matching a selector, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let query = SelectorQuery::parse(selector)?;
        let arena = self.arena.borrow();
        Ok(query.query_all(&arena, arena.document()))
    }

    pub fn root(&self) -> NodeId {
        self.arena.borrow().document()
    }

    pub fn body(&self) -> Option<NodeId> {
        self.arena.borrow().find_by_tag("body")
    }

    pub fn head(&self) -> Option<NodeId> {
        self.arena.borrow().find_by_tag("head")
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.borrow().parent(id)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.arena.borrow().children(id).collect()
    }

    /// Lowercase tag name of an element.
    pub fn tag_name(&self, id: NodeId) -> Option<String> {
        self.arena
            .borrow()
            .element_name(id)
            .map(|name| name.to_string())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.arena
            .borrow()
            .get_attr(id, name)
            .map(|value| value.to_string())
    }

    /// Class tokens of an element, in attribute order.
    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.arena.borrow().element_classes(id).to_vec()
    }

    pub fn text_content(&self, id: NodeId) -> String {
        serialize::text_content(&self.arena.borrow(), id)
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        serialize::inner_html(&self.arena.borrow(), id)
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        serialize::outer_html(&self.arena.borrow(), id)
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        let arena = self.arena.borrow();
        serialize::inner_html(&arena, arena.document())
    }

    /// Number of nodes ever allocated, attached or not.
    pub fn node_count(&self) -> usize {
        self.arena.borrow().len()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&NodeArena) -> R) -> R {
        f(&self.arena.borrow())
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut NodeArena) -> R) -> R {
        f(&mut self.arena.borrow_mut())
    }

    /// Replace a node's content with text, like assigning `innerText`.
    pub(crate) fn set_text(&self, id: NodeId, text: &str) {
        let mut arena = self.arena.borrow_mut();
        let replace_children = match arena.get_mut(id).map(|n| &mut n.data) {
            Some(NodeData::Text(data) | NodeData::Comment(data)) => {
                *data = text.to_string();
                false
            }
            Some(NodeData::Element { .. } | NodeData::Document) => true,
            _ => false,
        };

        if replace_children {
            arena.clear_children(id);
            if !text.is_empty() {
                let text_node = arena.create_text(text.to_string());
                arena.append(id, text_node);
            }
        }
    }

    /// Replace an element's children with parsed markup.
    pub(crate) fn set_inner_html(&self, id: NodeId, html: &str) {
        if !self.arena.borrow().is_element(id) {
            return;
        }
        let nodes = self.import_fragment(html);
        let mut arena = self.arena.borrow_mut();
        arena.clear_children(id);
        for node in nodes {
            arena.append(id, node);
        }
    }

    /// Parse a fragment in a scratch arena and copy its top-level nodes in.
    fn import_fragment(&self, html: &str) -> Vec<NodeId> {
        let (scratch, top_level) = parse_fragment(html);
        debug!(nodes = top_level.len(), bytes = html.len(), "parsed fragment");
        let mut arena = self.arena.borrow_mut();
        top_level
            .into_iter()
            .map(|node| arena.import(&scratch, node))
            .collect()
    }

    /// Insert `child` under `parent`, moving it out of its current position.
    pub(crate) fn insert(&self, parent: NodeId, child: NodeId, position: Position) -> Result<()> {
        let mut arena = self.arena.borrow_mut();
        arena.check_insert(parent, child)?;
        match position {
            Position::Last => arena.append(parent, child),
            Position::First => arena.prepend(parent, child),
        }
        Ok(())
    }

    pub(crate) fn clone_node(&self, id: NodeId) -> NodeId {
        self.arena.borrow_mut().deep_clone(id)
    }

    pub(crate) fn detach(&self, id: NodeId) {
        self.arena.borrow_mut().detach(id);
    }

    /// Take nodes from another document: each subtree is copied in and the
    /// original is detached from its document.
    pub(crate) fn adopt(&self, source: &Document, nodes: &[NodeId]) -> Vec<NodeId> {
        if std::ptr::eq(self, source) {
            return nodes.to_vec();
        }
        debug!(nodes = nodes.len(), "adopting nodes from another document");
        let mut source_arena = source.arena.borrow_mut();
        let mut arena = self.arena.borrow_mut();
        nodes
            .iter()
            .map(|&node| {
                let copy = arena.import(&source_arena, node);
                source_arena.detach(node);
                copy
            })
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.node_count())
            .finish()
    }
}
