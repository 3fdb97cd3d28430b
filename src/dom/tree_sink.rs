//! html5ever TreeSink implementation for NodeArena.

use std::borrow::Cow;
use std::cell::RefCell;

use html5ever::driver::ParseOpts;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName, parse_document};

use super::arena::{Attribute, NodeArena, NodeData, NodeId};

/// Handle used by TreeSink to reference nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle(pub NodeId);

impl Default for NodeHandle {
    fn default() -> Self {
        NodeHandle(NodeId::NONE)
    }
}

/// TreeSink that builds a NodeArena.
///
/// html5ever's TreeSink takes `&self` everywhere, so the arena sits in a
/// RefCell.
pub struct ArenaSink {
    arena: RefCell<NodeArena>,
    quirks_mode: RefCell<QuirksMode>,
}

impl Default for ArenaSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaSink {
    pub fn new() -> Self {
        Self {
            arena: RefCell::new(NodeArena::new()),
            quirks_mode: RefCell::new(QuirksMode::NoQuirks),
        }
    }

    /// Consume the sink and return the arena.
    pub fn into_arena(self) -> NodeArena {
        self.arena.into_inner()
    }
}

fn convert_attrs(attrs: Vec<Html5Attribute>) -> Vec<Attribute> {
    attrs
        .into_iter()
        .map(|a| Attribute {
            name: a.name,
            value: a.value.to_string(),
        })
        .collect()
}

impl TreeSink for ArenaSink {
    type Handle = NodeHandle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        // Lenient like browsers; recovered errors are only worth a trace.
        tracing::trace!(%msg, "html parse error");
    }

    fn get_document(&self) -> Self::Handle {
        NodeHandle(self.arena.borrow().document())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let arena = self.arena.borrow();
        match arena.get(target.0).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => {
                // SAFETY: html5ever reads the returned name immediately and
                // never holds it across another sink call, so the arena cannot
                // grow (and move the node) while the reference is alive. The
                // RefCell guard hides that from the borrow checker.
                unsafe { std::mem::transmute::<&QualName, &'a QualName>(name) }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let id = self
            .arena
            .borrow_mut()
            .create_element(name, convert_attrs(attrs));
        NodeHandle(id)
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        NodeHandle(self.arena.borrow_mut().create_comment(text.to_string()))
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> Self::Handle {
        // HTML has no processing instructions; keep the payload as a comment.
        NodeHandle(self.arena.borrow_mut().create_comment(data.to_string()))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let mut arena = self.arena.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => arena.append(parent.0, node.0),
            NodeOrText::AppendText(text) => arena.append_text(parent.0, &text),
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self.arena.borrow().parent(element.0);
        match parent {
            Some(parent) => self.append(&NodeHandle(parent), child),
            None => self.append(prev_element, child),
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        let mut arena = self.arena.borrow_mut();
        let doc = arena.document();
        let doctype = arena.create_doctype(
            name.to_string(),
            public_id.to_string(),
            system_id.to_string(),
        );
        arena.append(doc, doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents live directly under the template element.
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        *self.quirks_mode.borrow_mut() = mode;
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut arena = self.arena.borrow_mut();
        match new_node {
            NodeOrText::AppendNode(node) => arena.insert_before(sibling.0, node.0),
            NodeOrText::AppendText(text) => {
                let text_node = arena.create_text(text.to_string());
                arena.insert_before(sibling.0, text_node);
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        self.arena
            .borrow_mut()
            .add_attrs_if_missing(target.0, convert_attrs(attrs));
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.arena.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let mut arena = self.arena.borrow_mut();
        let children: Vec<_> = arena.children(node.0).collect();
        for child in children {
            arena.append(new_parent.0, child);
        }
    }
}

/// Parse a complete HTML document.
pub fn parse_html(html: &str) -> NodeArena {
    parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_arena()
}

/// Parse an HTML fragment as body content.
///
/// Returns the scratch arena and the top-level nodes of the fragment, still
/// attached to the scratch body. Callers import them into their own arena.
pub fn parse_fragment(html: &str) -> (NodeArena, Vec<NodeId>) {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{html}</body></html>");
    let arena = parse_html(&wrapped);
    let nodes = match arena.find_by_tag("body") {
        Some(body) => arena.children(body).collect(),
        None => Vec::new(),
    };
    (arena, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse() {
        let arena = parse_html("<html><body><p>Hello</p></body></html>");

        // document + html + head + body + p + text
        assert!(arena.len() > 3);

        let p = arena.find_by_tag("p").expect("should find p");
        let text_id = arena.children(p).next().expect("p should have child");
        assert_eq!(arena.text_content(text_id), Some("Hello"));
    }

    #[test]
    fn test_attributes() {
        let arena = parse_html(r#"<div id="main" class="container header">Content</div>"#);

        let div = arena.find_by_tag("div").expect("should find div");
        assert_eq!(arena.element_id(div), Some("main"));

        let classes = arena.element_classes(div);
        assert!(classes.contains(&"container".to_string()));
        assert!(classes.contains(&"header".to_string()));
    }

    #[test]
    fn test_empty_input_has_skeleton() {
        let arena = parse_html("");
        assert!(arena.find_by_tag("html").is_some());
        assert!(arena.find_by_tag("head").is_some());
        assert!(arena.find_by_tag("body").is_some());
    }

    #[test]
    fn test_misnested_markup_is_repaired() {
        let arena = parse_html("<p><b>bold<i>both</b>italic</i></p>");
        let p = arena.find_by_tag("p").expect("should find p");
        assert!(arena.children(p).count() >= 2);
    }

    #[test]
    fn test_parse_fragment_top_level_nodes() {
        let (arena, nodes) = parse_fragment("<li>one</li> tail <li>two</li>");
        assert_eq!(nodes.len(), 3);
        assert!(arena.is_element(nodes[0]));
        assert_eq!(arena.text_content(nodes[1]), Some(" tail "));
        assert_eq!(arena.element_name(nodes[2]).unwrap().as_ref(), "li");
    }

    #[test]
    fn test_parse_fragment_empty() {
        let (_, nodes) = parse_fragment("");
        assert!(nodes.is_empty());
    }
}
