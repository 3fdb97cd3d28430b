//! The chainable collection wrapper.
//!
//! Every operation walks the wrapped nodes once and hands each one to a host
//! primitive on [`Document`]. Writers return the wrapper so calls chain;
//! readers collapse their per-node results through [`Dome::map_one`].

use std::fmt;

use tracing::{debug, trace};

use crate::document::{Document, Position};
use crate::dom::NodeId;
use crate::error::Result;
use crate::value::{ClassNames, OneOrMany};

/// An ordered, fixed set of nodes from one document.
///
/// The set never changes after construction: tree operations move nodes
/// around the document, not in or out of the collection.
#[derive(Clone)]
pub struct Dome<'d> {
    doc: &'d Document,
    nodes: Vec<NodeId>,
}

impl<'d> Dome<'d> {
    pub fn new(doc: &'d Document, nodes: Vec<NodeId>) -> Self {
        Self { doc, nodes }
    }

    /// The document the nodes belong to.
    pub fn document(&self) -> &'d Document {
        self.doc
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Call `f` with each node and its index, collecting the results in order.
    pub fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(NodeId, usize) -> T,
    {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, &id)| f(id, i))
            .collect()
    }

    /// Like [`map`](Self::map), discarding results. Returns `self`.
    pub fn for_each<F>(&self, f: F) -> &Self
    where
        F: FnMut(NodeId, usize),
    {
        self.map(f);
        self
    }

    /// Like [`for_each`](Self::for_each), stopping at the first error.
    pub fn try_for_each<F>(&self, mut f: F) -> Result<&Self>
    where
        F: FnMut(NodeId, usize) -> Result<()>,
    {
        for (i, &id) in self.nodes.iter().enumerate() {
            f(id, i)?;
        }
        Ok(self)
    }

    /// [`map`](Self::map), then collapse: one node gives `One`, any other
    /// count gives `Many` (empty for an empty collection).
    pub fn map_one<T, F>(&self, f: F) -> OneOrMany<T>
    where
        F: FnMut(NodeId, usize) -> T,
    {
        OneOrMany::from_vec(self.map(f))
    }

    /// Rendered text of each node.
    pub fn text(&self) -> OneOrMany<String> {
        self.map_one(|id, _| self.doc.text_content(id))
    }

    /// Replace each node's content with a single text node.
    pub fn set_text(&self, text: &str) -> &Self {
        self.for_each(|id, _| self.doc.set_text(id, text))
    }

    /// Inner markup of each node.
    pub fn html(&self) -> OneOrMany<String> {
        self.map_one(|id, _| self.doc.inner_html(id))
    }

    /// Replace each element's children with parsed markup.
    pub fn set_html(&self, html: &str) -> &Self {
        self.for_each(|id, _| self.doc.set_inner_html(id, html))
    }

    /// Append one or more class names to each element's class attribute.
    ///
    /// Names are appended as given, each after a space. Existing tokens are
    /// not checked, so adding a class twice leaves it in the attribute twice.
    pub fn add_class<C: ClassNames + ?Sized>(&self, classes: &C) -> &Self {
        let suffix = classes.class_suffix();
        self.for_each(|id, _| {
            self.doc.write(|arena| {
                if !arena.is_element(id) {
                    return;
                }
                let mut value = arena.get_attr(id, "class").unwrap_or_default().to_string();
                value.push_str(&suffix);
                arena.set_attr(id, "class", &value);
            })
        })
    }

    /// Remove every occurrence of one class name from each element.
    ///
    /// The remaining tokens are rejoined with single spaces.
    pub fn remove_class(&self, name: &str) -> &Self {
        self.for_each(|id, _| {
            self.doc.write(|arena| {
                let Some(current) = arena.get_attr(id, "class") else {
                    return;
                };
                let kept: Vec<&str> = current.split_whitespace().filter(|&c| c != name).collect();
                let value = kept.join(" ");
                arena.set_attr(id, "class", &value);
            })
        })
    }

    /// Value of an attribute on each node; `None` where it is absent.
    pub fn attr(&self, name: &str) -> OneOrMany<Option<String>> {
        self.map_one(|id, _| self.doc.attribute(id, name))
    }

    /// Set an attribute on each element, replacing any existing value.
    pub fn set_attr(&self, name: &str, value: &str) -> &Self {
        self.for_each(|id, _| self.doc.write(|arena| arena.set_attr(id, name, value)))
    }

    /// Remove an attribute from each element.
    pub fn remove_attr(&self, name: &str) -> &Self {
        self.for_each(|id, _| self.doc.write(|arena| arena.remove_attr(id, name)))
    }

    /// Append `other`'s nodes to every node in this collection.
    ///
    /// The first receiver gets the nodes themselves; every later receiver
    /// gets deep clones, so one source can be fanned out to many parents.
    pub fn append(&self, other: &Dome<'_>) -> Result<&Self> {
        self.insert_all(other, Position::Last)
    }

    /// Insert `other`'s nodes at the start of every node in this collection,
    /// keeping their relative order. Clones are made as for
    /// [`append`](Self::append).
    pub fn prepend(&self, other: &Dome<'_>) -> Result<&Self> {
        self.insert_all(other, Position::First)
    }

    fn insert_all(&self, other: &Dome<'_>, position: Position) -> Result<&Self> {
        if self.is_empty() || other.is_empty() {
            return Ok(self);
        }
        let children = self.doc.adopt(other.doc, &other.nodes);
        debug!(
            receivers = self.len(),
            nodes = children.len(),
            ?position,
            "inserting nodes"
        );

        self.try_for_each(|parent, i| {
            let insert = |child: NodeId| {
                let child = if i > 0 {
                    self.doc.clone_node(child)
                } else {
                    child
                };
                trace!(%parent, %child, "insert");
                self.doc.insert(parent, child, position)
            };
            match position {
                Position::Last => children.iter().try_for_each(|&child| insert(child)),
                // Each insert lands in front, so walk backwards to keep order.
                Position::First => children.iter().rev().try_for_each(|&child| insert(child)),
            }
        })
    }

    /// Detach every node from its parent. Parentless nodes are skipped.
    pub fn remove(&self) -> &Self {
        self.for_each(|id, _| self.doc.detach(id))
    }
}

impl fmt::Debug for Dome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dome")
            .field("len", &self.nodes.len())
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<'a> IntoIterator for &'a Dome<'_> {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::parse(
            r#"<ul id="list"><li class="item">one</li><li class="item">two</li><li class="item">three</li></ul>"#,
        )
    }

    #[test]
    fn test_map_passes_index_in_order() {
        let doc = doc();
        let items = doc.get(".item").unwrap();
        let seen = items.map(|id, i| (i, doc.text_content(id)));
        assert_eq!(
            seen,
            vec![(0, "one".into()), (1, "two".into()), (2, "three".into())]
        );
    }

    #[test]
    fn test_for_each_returns_same_instance() {
        let doc = doc();
        let items = doc.get(".item").unwrap();
        let mut count = 0;
        let returned = items.for_each(|_, _| count += 1);
        assert!(std::ptr::eq(returned, &items));
        assert_eq!(count, 3);
    }

    #[test]
    fn test_map_one_collapses() {
        let doc = doc();
        let one = doc.get("#list").unwrap();
        assert_eq!(one.map_one(|_, i| i), OneOrMany::One(0));

        let many = doc.get(".item").unwrap();
        assert_eq!(many.map_one(|_, i| i), OneOrMany::Many(vec![0, 1, 2]));

        let none = doc.get(".missing").unwrap();
        assert_eq!(none.map_one(|_, i| i), OneOrMany::Many(vec![]));
    }

    #[test]
    fn test_text_read_and_write() {
        let doc = doc();
        let items = doc.get(".item").unwrap();
        assert_eq!(
            items.text(),
            OneOrMany::Many(vec!["one".into(), "two".into(), "three".into()])
        );

        assert!(std::ptr::eq(items.set_text("x"), &items));
        assert_eq!(items.text().into_vec(), vec!["x", "x", "x"]);
    }

    #[test]
    fn test_html_read_and_write() {
        let doc = doc();
        let list = doc.get("#list").unwrap();
        list.set_html("<li><b>new</b></li>");

        assert_eq!(list.html(), OneOrMany::One("<li><b>new</b></li>".to_string()));
        assert!(doc.get(".item").unwrap().is_empty());
    }

    #[test]
    fn test_add_class_accumulates_duplicates() {
        let doc = Document::parse("<p>a</p>");
        let p = doc.get("p").unwrap();
        p.add_class("x").add_class("x").add_class(&["y", "z"]);

        assert_eq!(p.attr("class"), OneOrMany::One(Some(" x x y z".to_string())));
    }

    #[test]
    fn test_remove_class_removes_every_occurrence() {
        let doc = Document::parse(r#"<p class="a x b x">a</p>"#);
        let p = doc.get("p").unwrap();
        p.add_class("x").remove_class("x");

        assert_eq!(p.attr("class"), OneOrMany::One(Some("a b".to_string())));
        assert!(doc.get(".x").unwrap().is_empty());
    }

    #[test]
    fn test_remove_class_without_attribute_is_noop() {
        let doc = Document::parse("<p>a</p>");
        let p = doc.get("p").unwrap();
        p.remove_class("x");
        assert_eq!(p.attr("class"), OneOrMany::One(None));
    }

    #[test]
    fn test_attr_set_get_remove() {
        let doc = doc();
        let items = doc.get(".item").unwrap();
        items.set_attr("data-k", "v");

        assert_eq!(
            items.attr("data-k"),
            OneOrMany::Many(vec![Some("v".into()), Some("v".into()), Some("v".into())])
        );

        items.remove_attr("data-k");
        assert_eq!(items.attr("data-k"), OneOrMany::Many(vec![None, None, None]));
    }

    #[test]
    fn test_append_fans_out_clones() {
        let doc = Document::parse(r#"<div class="box"></div><div class="box"></div>"#);
        let boxes = doc.get(".box").unwrap();
        let badge = doc.create("span", [("className", "badge")]);
        let original = badge.nodes()[0];

        boxes.append(&badge).unwrap();

        let badges = doc.query_all(".badge").unwrap();
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0], original);
        assert_ne!(badges[1], original);
        assert_eq!(doc.parent(original), Some(boxes.nodes()[0]));
    }

    #[test]
    fn test_attr_names_match_case_insensitively() {
        let doc = Document::parse("<p ID='a'>x</p>");
        let p = doc.get("p").unwrap();
        assert_eq!(p.attr("ID"), OneOrMany::One(Some("a".into())));
        assert_eq!(p.attr("id"), OneOrMany::One(Some("a".into())));

        p.set_attr("Data-X", "1");
        assert_eq!(p.attr("Data-X"), OneOrMany::One(Some("1".into())));
        assert_eq!(p.attr("data-x"), OneOrMany::One(Some("1".into())));
        assert_eq!(doc.outer_html(p.nodes()[0]), r#"<p id="a" data-x="1">x</p>"#);

        p.remove_attr("DATA-x");
        assert_eq!(p.attr("data-x"), OneOrMany::One(None));

        let made = doc.create("div", [("ID", "x")]);
        assert_eq!(made.attr("ID"), OneOrMany::One(Some("x".into())));
    }

    #[test]
    fn test_append_clones_are_independent() {
        let doc = Document::parse(r#"<div class="box"></div><div class="box"></div><div class="box"></div>"#);
        let boxes = doc.get(".box").unwrap();
        let label = doc.create("span", [("text", "label")]);

        boxes.append(&label).unwrap();
        let spans = doc.get(".box > span").unwrap();
        assert_eq!(spans.len(), 3);

        doc.get(spans.nodes()[1]).unwrap().set_text("changed");
        assert_eq!(
            spans.text().into_vec(),
            vec!["label", "changed", "label"]
        );
        assert_eq!(label.text(), OneOrMany::One("label".into()));
        assert_eq!(
            boxes.html().into_vec(),
            vec!["<span>label</span>", "<span>changed</span>", "<span>label</span>"]
        );
    }

    #[test]
    fn test_prepend_fans_out_in_order() {
        let doc = Document::parse("<ol><li>z</li></ol><ol><li>z</li></ol><ol><li>z</li></ol>");
        let lists = doc.get("ol").unwrap();
        let new = doc.fragment("<li>a</li><li>b</li>");
        let originals = new.nodes().to_vec();

        lists.prepend(&new).unwrap();
        assert_eq!(
            lists.html().into_vec(),
            vec!["<li>a</li><li>b</li><li>z</li>"; 3]
        );
        assert_eq!(doc.children(lists.nodes()[0])[..2], originals[..]);

        let second = doc.children(lists.nodes()[1]);
        assert!(second.iter().all(|id| !originals.contains(id)));
        doc.get(second[0]).unwrap().set_text("edited");

        assert_eq!(
            lists.html().into_vec(),
            vec![
                "<li>a</li><li>b</li><li>z</li>",
                "<li>edited</li><li>b</li><li>z</li>",
                "<li>a</li><li>b</li><li>z</li>",
            ]
        );
    }

    #[test]
    fn test_deeply_nested_tree_reads_back() {
        let doc = Document::new();
        let mut inner = doc.create_element("div");
        for _ in 0..100_000 {
            let outer = doc.create_element("div");
            outer.append(&inner).unwrap();
            inner = outer;
        }
        let body = doc.get("body").unwrap();
        body.append(&inner).unwrap();

        let html = body.html().one().unwrap();
        assert_eq!(html.matches("<div>").count(), 100_001);
        assert!(html.ends_with("</div></div>"));
        assert_eq!(body.text(), OneOrMany::One(String::new()));
    }

    #[test]
    fn test_prepend_keeps_order() {
        let doc = Document::parse("<ol><li>c</li></ol>");
        let ol = doc.get("ol").unwrap();
        let new = doc.fragment("<li>a</li><li>b</li>");

        ol.prepend(&new).unwrap();
        assert_eq!(ol.html(), OneOrMany::One("<li>a</li><li>b</li><li>c</li>".into()));
    }

    #[test]
    fn test_append_into_descendant_fails() {
        let doc = Document::parse("<div id='outer'><div id='inner'></div></div>");
        let outer = doc.get("#outer").unwrap();
        let inner = doc.get("#inner").unwrap();

        assert!(inner.append(&outer).is_err());
        assert_eq!(doc.parent(inner.nodes()[0]), Some(outer.nodes()[0]));
    }

    #[test]
    fn test_remove_detaches_and_skips_orphans() {
        let doc = doc();
        let items = doc.get(".item").unwrap();
        items.remove().remove();

        assert!(doc.get(".item").unwrap().is_empty());
        assert_eq!(items.len(), 3);
        assert_eq!(items.text().into_vec(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_collection_is_noop() {
        let doc = doc();
        let none = doc.get(".missing").unwrap();
        let before = doc.to_html();

        none.set_text("x")
            .set_html("<b>x</b>")
            .add_class("x")
            .remove_class("x")
            .set_attr("x", "y")
            .remove();
        none.append(&doc.get(".item").unwrap()).unwrap();

        assert_eq!(doc.to_html(), before);
        assert!(none.text().is_empty());
    }
}
