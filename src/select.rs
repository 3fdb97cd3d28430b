//! Entry points: resolve a selection or build a new element.

use tracing::debug;

use crate::document::Document;
use crate::dom::{NodeId, SelectorQuery};
use crate::dome::Dome;
use crate::error::Result;

/// What to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<'a> {
    /// A CSS selector list, resolved against the whole document.
    Query(&'a str),
    /// A single node.
    Node(NodeId),
    /// An existing list of nodes, taken as-is.
    Nodes(Vec<NodeId>),
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(query: &'a str) -> Self {
        Target::Query(query)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(query: &'a String) -> Self {
        Target::Query(query.as_str())
    }
}

impl From<NodeId> for Target<'_> {
    fn from(id: NodeId) -> Self {
        Target::Node(id)
    }
}

impl From<Vec<NodeId>> for Target<'_> {
    fn from(ids: Vec<NodeId>) -> Self {
        Target::Nodes(ids)
    }
}

impl From<&[NodeId]> for Target<'_> {
    fn from(ids: &[NodeId]) -> Self {
        Target::Nodes(ids.to_vec())
    }
}

impl From<&Dome<'_>> for Target<'_> {
    fn from(dome: &Dome<'_>) -> Self {
        Target::Nodes(dome.nodes().to_vec())
    }
}

/// Wrap the nodes a target resolves to.
///
/// Queries yield matching elements in document order; an empty match is an
/// empty collection, not an error. A selector the engine cannot parse is
/// reported as [`crate::Error::InvalidSelector`].
///
/// ```
/// use dome::{Document, OneOrMany, get};
///
/// let doc = Document::parse("<p class='item'>a</p><p class='item'>b</p>");
/// let items = get(&doc, ".item").unwrap();
///
/// assert_eq!(items.text(), OneOrMany::Many(vec!["a".into(), "b".into()]));
/// ```
pub fn get<'d, 'a>(doc: &'d Document, target: impl Into<Target<'a>>) -> Result<Dome<'d>> {
    let nodes = match target.into() {
        Target::Query(selector) => {
            let query = SelectorQuery::parse(selector)?;
            let nodes = doc.read(|arena| query.query_all(arena, arena.document()));
            debug!(selector, matches = nodes.len(), "resolved query");
            nodes
        }
        Target::Node(id) => vec![id],
        Target::Nodes(ids) => ids,
    };
    Ok(Dome::new(doc, nodes))
}

/// Create a detached element and apply attributes to it.
///
/// `className` goes through [`Dome::add_class`] and `text` through
/// [`Dome::set_text`]; every other key becomes a plain attribute, in
/// iteration order. Neither special key is ever set as an attribute.
///
/// ```
/// use dome::{Document, create};
///
/// let doc = Document::new();
/// let div = create(&doc, "div", [("className", "a b"), ("text", "hi"), ("id", "x")]);
///
/// assert_eq!(doc.outer_html(div.nodes()[0]), r#"<div class=" a b" id="x">hi</div>"#);
/// ```
pub fn create<'d, I, K, V>(doc: &'d Document, tag: &str, attributes: I) -> Dome<'d>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let element = doc.create_element(tag);
    for (key, value) in attributes {
        let value = value.as_ref();
        match key.as_ref() {
            "className" => element.add_class(value),
            "text" => element.set_text(value),
            name => element.set_attr(name, value),
        };
    }
    debug!(tag, "created element");
    element
}
