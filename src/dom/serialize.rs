//! HTML and text serialization of arena subtrees.

use html5ever::ns;

use super::arena::{NodeArena, NodeData, NodeId};

/// Elements with no end tag and no content.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text children are written verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Markup of a node's children (`innerHTML`).
pub fn inner_html(arena: &NodeArena, id: NodeId) -> String {
    let mut out = String::new();
    let raw = is_raw_text_parent(arena, id);
    for child in arena.children(id) {
        write_node(arena, child, raw, &mut out);
    }
    out
}

/// Markup of a node including itself (`outerHTML`).
pub fn outer_html(arena: &NodeArena, id: NodeId) -> String {
    let mut out = String::new();
    let raw = arena
        .parent(id)
        .is_some_and(|parent| is_raw_text_parent(arena, parent));
    write_node(arena, id, raw, &mut out);
    out
}

/// Concatenated text of every text node in the subtree.
pub fn text_content(arena: &NodeArena, id: NodeId) -> String {
    if let Some(text) = arena.text_content(id) {
        return text.to_string();
    }
    arena
        .descendants(id)
        .filter_map(|d| arena.text_content(d))
        .collect()
}

fn is_raw_text_parent(arena: &NodeArena, id: NodeId) -> bool {
    let html = arena
        .element_namespace(id)
        .is_some_and(|ns| *ns == ns!(html));
    html && arena
        .element_name(id)
        .is_some_and(|name| RAW_TEXT_ELEMENTS.contains(&name.as_ref()))
}

/// Pending work while serializing. The walk keeps its own stack so nesting
/// depth is bounded by memory, not by the thread's call stack.
enum Step {
    /// Write a node; the flag marks text inside a raw-text element.
    Open(NodeId, bool),
    /// Write an element's end tag.
    Close(NodeId),
}

fn write_node(arena: &NodeArena, id: NodeId, raw_text: bool, out: &mut String) {
    let mut stack = vec![Step::Open(id, raw_text)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open(id, raw) => {
                if let Some(children_raw) = open_node(arena, id, raw, out) {
                    stack.push(Step::Close(id));
                    push_children(arena, id, children_raw, &mut stack);
                }
            }
            Step::Close(id) => {
                if let Some(tag) = arena.element_name(id) {
                    out.push_str("</");
                    out.push_str(tag.as_ref());
                    out.push('>');
                }
            }
        }
    }
}

/// Write everything up to a node's children. Returns the raw-text flag for
/// the children when they and an end step must follow.
fn open_node(arena: &NodeArena, id: NodeId, raw_text: bool, out: &mut String) -> Option<bool> {
    let node = arena.get(id)?;

    match &node.data {
        // No tags of its own; the end step writes nothing either.
        NodeData::Document => Some(false),
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.as_ref();
            out.push('<');
            out.push_str(tag);
            for attr in attrs {
                out.push(' ');
                if let Some(prefix) = &attr.name.prefix {
                    out.push_str(prefix.as_ref());
                    out.push(':');
                }
                out.push_str(attr.name.local.as_ref());
                out.push_str("=\"");
                escape_into(&attr.value, true, out);
                out.push('"');
            }
            out.push('>');

            let is_html = name.ns == ns!(html);
            if is_html && VOID_ELEMENTS.contains(&tag) {
                return None;
            }
            Some(is_html && RAW_TEXT_ELEMENTS.contains(&tag))
        }
        NodeData::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                escape_into(text, false, out);
            }
            None
        }
        NodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
            None
        }
        NodeData::Doctype { name, .. } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
            None
        }
    }
}

/// Queue a node's children so they pop in document order.
fn push_children(arena: &NodeArena, parent: NodeId, raw_text: bool, stack: &mut Vec<Step>) {
    let mut child = arena.get(parent).map_or(NodeId::NONE, |n| n.last_child);
    while child.is_some() {
        stack.push(Step::Open(child, raw_text));
        child = arena.get(child).map_or(NodeId::NONE, |n| n.prev_sibling);
    }
}

/// Escape per the HTML fragment serialization algorithm.
fn escape_into(s: &str, attr_mode: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::tree_sink::parse_html;

    #[test]
    fn test_inner_and_outer_html() {
        let arena = parse_html(r#"<div id="a"><p class="x">Hi <b>there</b></p><br></div>"#);
        let div = arena.find_by_tag("div").unwrap();

        assert_eq!(
            inner_html(&arena, div),
            r#"<p class="x">Hi <b>there</b></p><br>"#
        );
        assert_eq!(
            outer_html(&arena, div),
            r#"<div id="a"><p class="x">Hi <b>there</b></p><br></div>"#
        );
    }

    #[test]
    fn test_escaping() {
        let arena = parse_html(r#"<p title="a &quot;b&quot; <c>">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#);
        let p = arena.find_by_tag("p").unwrap();

        assert_eq!(
            outer_html(&arena, p),
            r#"<p title="a &quot;b&quot; <c>">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#
        );
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let arena = parse_html("<script>if (a < b && c) {}</script>");
        let script = arena.find_by_tag("script").unwrap();

        assert_eq!(inner_html(&arena, script), "if (a < b && c) {}");
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let arena = parse_html("<div>one <span>two <i>three</i></span> four<!-- no --></div>");
        let div = arena.find_by_tag("div").unwrap();

        assert_eq!(text_content(&arena, div), "one two three four");
    }

    #[test]
    fn test_document_round_trip() {
        let arena = parse_html("<!DOCTYPE html><html><head></head><body><p>x</p></body></html>");
        assert_eq!(
            inner_html(&arena, arena.document()),
            "<!DOCTYPE html><html><head></head><body><p>x</p></body></html>"
        );
    }

    #[test]
    fn test_deep_nesting_serializes_without_recursion() {
        let mut arena = NodeArena::new();
        let root = arena.create_html_element("div");
        let mut parent = root;
        for _ in 0..200_000 {
            let child = arena.create_html_element("div");
            arena.append(parent, child);
            parent = child;
        }
        arena.append_text(parent, "leaf");

        let html = outer_html(&arena, root);
        assert!(html.starts_with("<div><div><div>"));
        assert!(html.ends_with("leaf</div></div></div>"));
        assert_eq!(html.matches("<div>").count(), 200_001);
        assert_eq!(html.matches("</div>").count(), 200_001);
        assert_eq!(text_content(&arena, root), "leaf");
    }
}
