//! Arena-backed node storage for the host document.
//!
//! All nodes live in one vector and link to each other by index. Slots are
//! never freed: a removed node keeps its id and simply has no parent, so
//! handles held by callers stay usable after the node leaves the tree.

use std::borrow::Cow;
use std::fmt;

use html5ever::{LocalName, Namespace, QualName, ns};

use crate::error::{Error, Result};

/// Handle to a node in a document.
///
/// Handles are plain indices. They do not own the node and are only
/// meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel value for no node.
    pub(crate) const NONE: NodeId = NodeId(u32::MAX);

    pub(crate) fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub(crate) fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Cached `id` attribute for selector matching.
        id: Option<String>,
        /// Cached class tokens for selector matching.
        classes: Vec<String>,
    },
    Text(String),
    Comment(String),
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
}

impl NodeData {
    fn element(name: QualName, attrs: Vec<Attribute>) -> Self {
        let (id, classes) = extract_id_and_classes(&attrs);
        NodeData::Element {
            name,
            attrs,
            id,
            classes,
        }
    }
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// Attribute in the null namespace, as `setAttribute` creates them.
    pub fn new(local: &str, value: impl Into<String>) -> Self {
        Self {
            name: QualName::new(None, ns!(), LocalName::from(local)),
            value: value.into(),
        }
    }
}

/// A node and its tree links.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Arena of nodes rooted at a document node.
pub struct NodeArena {
    nodes: Vec<Node>,
    document: NodeId,
}

impl NodeArena {
    /// Create an arena holding only a document root.
    pub fn new() -> Self {
        let mut arena = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        arena.document = arena.alloc(Node::new(NodeData::Document));
        arena
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Document root.
    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Number of allocated nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the document root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        self.alloc(Node::new(NodeData::element(name, attrs)))
    }

    /// Create a detached HTML element the way `document.createElement` does,
    /// lowercasing the tag name.
    pub fn create_html_element(&mut self, tag: &str) -> NodeId {
        let name = QualName::new(None, ns!(html), LocalName::from(tag.to_ascii_lowercase()));
        self.create_element(name, Vec::new())
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    pub fn create_doctype(&mut self, name: String, public_id: String, system_id: String) -> NodeId {
        self.alloc(Node::new(NodeData::Doctype {
            name,
            public_id,
            system_id,
        }))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(NodeId::is_some)
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current position first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);

        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
        }

        if let Some(last_node) = self.get_mut(last_child) {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        // Detaching first can change the sibling's prev link.
        self.detach(new_node);

        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Insert `child` as the first child of `parent`.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        if first == child {
            return;
        }
        if first.is_none() {
            self.append(parent, child);
        } else {
            self.insert_before(first, child);
        }
    }

    /// Unlink a node from its parent. No-op for parentless nodes.
    pub fn detach(&mut self, target: NodeId) {
        let (parent, prev, next) = match self.get(target) {
            Some(n) if n.parent.is_some() => (n.parent, n.prev_sibling, n.next_sibling),
            _ => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(target) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Detach every child of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children: Vec<_> = self.children(parent).collect();
        for child in children {
            self.detach(child);
        }
    }

    /// Append text to the last child if it is a text node, otherwise add a
    /// new text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let NodeData::Text(ref mut existing) = last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// True if `ancestor` is `node` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_some() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map(|n| n.parent).unwrap_or(NodeId::NONE);
        }
        false
    }

    /// Check that `child` may be inserted under `parent`.
    pub fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<()> {
        let hierarchy = |reason| Error::Hierarchy {
            parent,
            child,
            reason,
        };

        match self.get(parent).map(|n| &n.data) {
            Some(NodeData::Element { .. } | NodeData::Document) => {}
            _ => return Err(hierarchy("parent cannot have children")),
        }
        match self.get(child).map(|n| &n.data) {
            None | Some(NodeData::Document) => return Err(hierarchy("node cannot be inserted")),
            _ => {}
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(hierarchy("node is an ancestor of the parent"));
        }
        Ok(())
    }

    /// Copy the subtree rooted at `id` into new, detached nodes.
    pub fn deep_clone(&mut self, id: NodeId) -> NodeId {
        let items = self.subtree(id);
        self.graft(items)
    }

    /// Copy the subtree rooted at `id` in another arena into this one.
    pub fn import(&mut self, source: &NodeArena, id: NodeId) -> NodeId {
        self.graft(source.subtree(id))
    }

    /// Snapshot of a subtree with parents ahead of their children: each entry
    /// holds node data and the position of its parent within the snapshot.
    fn subtree(&self, id: NodeId) -> Vec<(NodeData, Option<usize>)> {
        let mut items = Vec::new();
        let Some(root) = self.get(id) else {
            return items;
        };
        items.push((root.data.clone(), None));

        let mut stack = vec![(id, 0usize)];
        while let Some((current, slot)) = stack.pop() {
            let children: Vec<_> = self.children(current).collect();
            for child in children {
                if let Some(node) = self.get(child) {
                    items.push((node.data.clone(), Some(slot)));
                    stack.push((child, items.len() - 1));
                }
            }
        }
        items
    }

    fn graft(&mut self, items: Vec<(NodeData, Option<usize>)>) -> NodeId {
        let mut ids: Vec<NodeId> = Vec::with_capacity(items.len());
        for (data, parent_slot) in items {
            let id = self.alloc(Node::new(data));
            if let Some(slot) = parent_slot {
                self.append(ids[slot], id);
            }
            ids.push(id);
        }
        ids.first().copied().unwrap_or(NodeId::NONE)
    }

    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Children {
            arena: self,
            current: first,
        }
    }

    /// Pre-order traversal of everything below `root`, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let first = self
            .get(root)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Descendants {
            arena: self,
            root,
            next: first,
        }
    }

    /// First node below the document matching a predicate, in document order.
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        self.descendants(self.document)
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|node| match &node.data {
            NodeData::Element { name, .. } => name.local.as_ref() == tag,
            _ => false,
        })
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    arena: &'a NodeArena,
    current: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .arena
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    arena: &'a NodeArena,
    root: NodeId,
    next: NodeId,
}

impl Descendants<'_> {
    fn following(&self, id: NodeId) -> NodeId {
        let Some(node) = self.arena.get(id) else {
            return NodeId::NONE;
        };
        if node.first_child.is_some() {
            return node.first_child;
        }

        let mut current = id;
        while current != self.root {
            let Some(node) = self.arena.get(current) else {
                break;
            };
            if node.next_sibling.is_some() {
                return node.next_sibling;
            }
            current = node.parent;
        }
        NodeId::NONE
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let id = self.next;
        self.next = self.following(id);
        Some(id)
    }
}

/// Element accessors.
impl NodeArena {
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    pub fn element_namespace(&self, id: NodeId) -> Option<&Namespace> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.ns),
            _ => None,
        })
    }

    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { attrs, .. } => Some(attrs.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Look up an attribute. Names are matched lowercased on HTML elements,
    /// as `set_attr` stores them.
    pub fn get_attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        let Some(NodeData::Element { name, attrs, .. }) = self.get(id).map(|n| &n.data) else {
            return None;
        };
        let local = attr_key(name, attr_name);
        attrs
            .iter()
            .find(|a| a.name.local.as_ref() == local)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any existing value. Names are lowercased
    /// on HTML elements. Non-element nodes are left alone.
    pub fn set_attr(&mut self, id: NodeId, attr_name: &str, value: &str) {
        let Some(NodeData::Element {
            name,
            attrs,
            id: id_cache,
            classes,
        }) = self.get_mut(id).map(|n| &mut n.data)
        else {
            return;
        };

        let local = attr_key(name, attr_name);

        match attrs.iter_mut().find(|a| a.name.local.as_ref() == local) {
            Some(existing) => existing.value = value.to_string(),
            None => attrs.push(Attribute::new(&local, value)),
        }
        (*id_cache, *classes) = extract_id_and_classes(attrs);
    }

    /// Add each attribute the element does not already carry.
    pub fn add_attrs_if_missing(&mut self, id: NodeId, new_attrs: Vec<Attribute>) {
        let Some(NodeData::Element {
            attrs,
            id: id_cache,
            classes,
            ..
        }) = self.get_mut(id).map(|n| &mut n.data)
        else {
            return;
        };

        for attr in new_attrs {
            if !attrs.iter().any(|a| a.name == attr.name) {
                attrs.push(attr);
            }
        }
        (*id_cache, *classes) = extract_id_and_classes(attrs);
    }

    pub fn remove_attr(&mut self, id: NodeId, attr_name: &str) {
        let Some(NodeData::Element {
            name,
            attrs,
            id: id_cache,
            classes,
        }) = self.get_mut(id).map(|n| &mut n.data)
        else {
            return;
        };

        let local = attr_key(name, attr_name);
        attrs.retain(|a| a.name.local.as_ref() != local);
        (*id_cache, *classes) = extract_id_and_classes(attrs);
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { id, .. } => id.as_deref(),
            _ => None,
        })
    }

    pub fn element_classes(&self, id: NodeId) -> &[String] {
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Text(_)))
    }

    /// Contents of a text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

/// Attribute name as stored on `element`: lowercased in the HTML namespace.
fn attr_key<'a>(element: &QualName, attr_name: &'a str) -> Cow<'a, str> {
    if element.ns == ns!(html) && attr_name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(attr_name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(attr_name)
    }
}

fn extract_id_and_classes(attrs: &[Attribute]) -> (Option<String>, Vec<String>) {
    let mut id = None;
    let mut classes = Vec::new();
    for attr in attrs {
        match attr.name.local.as_ref() {
            "id" => id = Some(attr.value.clone()),
            "class" => {
                classes = attr
                    .value
                    .split_whitespace()
                    .map(|s| s.to_string())
                    .collect()
            }
            _ => {}
        }
    }
    (id, classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    fn tags(arena: &NodeArena, parent: NodeId) -> Vec<String> {
        arena
            .children(parent)
            .filter_map(|c| arena.element_name(c).map(|n| n.to_string()))
            .collect()
    }

    #[test]
    fn test_create_elements() {
        let mut arena = NodeArena::new();

        let div = arena.create_element(make_qname("div"), vec![Attribute::new("id", "main")]);
        arena.append(arena.document(), div);

        assert_eq!(arena.element_name(div).unwrap().as_ref(), "div");
        assert_eq!(arena.element_id(div), Some("main"));
        assert_eq!(arena.parent(div), Some(arena.document()));
    }

    #[test]
    fn test_append_children() {
        let mut arena = NodeArena::new();

        let parent = arena.create_html_element("div");
        let child1 = arena.create_html_element("p");
        let child2 = arena.create_html_element("span");

        arena.append(arena.document(), parent);
        arena.append(parent, child1);
        arena.append(parent, child2);

        assert_eq!(tags(&arena, parent), vec!["p", "span"]);
    }

    #[test]
    fn test_append_moves_existing_child() {
        let mut arena = NodeArena::new();
        let a = arena.create_html_element("div");
        let b = arena.create_html_element("div");
        let child = arena.create_html_element("p");

        arena.append(a, child);
        arena.append(b, child);

        assert_eq!(arena.children(a).count(), 0);
        assert_eq!(arena.children(b).collect::<Vec<_>>(), vec![child]);
        assert_eq!(arena.parent(child), Some(b));
    }

    #[test]
    fn test_prepend_and_insert_before() {
        let mut arena = NodeArena::new();
        let parent = arena.create_html_element("ul");
        let li = arena.create_html_element("li");
        let em = arena.create_html_element("em");
        let b = arena.create_html_element("b");

        arena.prepend(parent, li);
        arena.prepend(parent, em);
        arena.insert_before(li, b);

        assert_eq!(tags(&arena, parent), vec!["em", "b", "li"]);
    }

    #[test]
    fn test_detach_middle_child() {
        let mut arena = NodeArena::new();
        let parent = arena.create_html_element("div");
        let a = arena.create_html_element("a");
        let b = arena.create_html_element("b");
        let i = arena.create_html_element("i");
        arena.append(parent, a);
        arena.append(parent, b);
        arena.append(parent, i);

        arena.detach(b);
        arena.detach(b);

        assert_eq!(tags(&arena, parent), vec!["a", "i"]);
        assert_eq!(arena.parent(b), None);
        assert_eq!(arena.get(i).unwrap().prev_sibling, a);
    }

    #[test]
    fn test_text_merging() {
        let mut arena = NodeArena::new();

        let p = arena.create_html_element("p");
        arena.append(arena.document(), p);

        arena.append_text(p, "Hello, ");
        arena.append_text(p, "World!");

        let children: Vec<_> = arena.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(arena.text_content(children[0]), Some("Hello, World!"));
    }

    #[test]
    fn test_deep_clone_preserves_order_and_is_independent() {
        let mut arena = NodeArena::new();
        let div = arena.create_html_element("div");
        for tag in ["h1", "p", "footer"] {
            let child = arena.create_html_element(tag);
            arena.append(div, child);
        }
        arena.set_attr(div, "class", "card");

        let copy = arena.deep_clone(div);
        assert_ne!(copy, div);
        assert_eq!(arena.parent(copy), None);
        assert_eq!(tags(&arena, copy), vec!["h1", "p", "footer"]);

        arena.set_attr(copy, "class", "other");
        assert_eq!(arena.get_attr(div, "class"), Some("card"));
        assert_eq!(arena.element_classes(copy).to_vec(), vec!["other".to_string()]);
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut arena = NodeArena::new();
        let root = arena.create_html_element("div");
        let a = arena.create_html_element("a");
        let a1 = arena.create_html_element("b");
        let c = arena.create_html_element("c");
        arena.append(arena.document(), root);
        arena.append(root, a);
        arena.append(a, a1);
        arena.append(root, c);

        let order: Vec<_> = arena.descendants(root).collect();
        assert_eq!(order, vec![a, a1, c]);
        assert_eq!(arena.descendants(c).count(), 0);
    }

    #[test]
    fn test_check_insert_rejects_cycles() {
        let mut arena = NodeArena::new();
        let outer = arena.create_html_element("div");
        let inner = arena.create_html_element("div");
        arena.append(outer, inner);

        assert!(arena.check_insert(outer, inner).is_ok());
        assert!(arena.check_insert(inner, outer).is_err());
        assert!(arena.check_insert(inner, inner).is_err());

        let text = arena.create_text("x".to_string());
        assert!(arena.check_insert(text, inner).is_err());
    }

    #[test]
    fn test_set_and_remove_attr_refresh_cache() {
        let mut arena = NodeArena::new();
        let div = arena.create_html_element("DIV");
        assert_eq!(arena.element_name(div).unwrap().as_ref(), "div");

        arena.set_attr(div, "ID", "x");
        arena.set_attr(div, "class", "a  b");
        assert_eq!(arena.element_id(div), Some("x"));
        assert_eq!(arena.element_classes(div).len(), 2);

        arena.remove_attr(div, "id");
        assert_eq!(arena.element_id(div), None);
        assert_eq!(arena.get_attr(div, "id"), None);
    }

    #[test]
    fn test_attr_lookup_lowercases_on_html_only() {
        let mut arena = NodeArena::new();
        let div = arena.create_html_element("div");
        arena.set_attr(div, "Data-X", "1");
        assert_eq!(arena.get_attr(div, "Data-X"), Some("1"));
        assert_eq!(arena.get_attr(div, "data-x"), Some("1"));

        let svg = QualName::new(None, ns!(svg), LocalName::from("svg"));
        let svg = arena.create_element(svg, Vec::new());
        arena.set_attr(svg, "viewBox", "0 0 1 1");
        assert_eq!(arena.get_attr(svg, "viewBox"), Some("0 0 1 1"));
        assert_eq!(arena.get_attr(svg, "viewbox"), None);
    }
}
