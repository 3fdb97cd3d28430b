//! # dome
//!
//! A small chainable wrapper for selecting and mutating HTML elements.
//!
//! ## Features
//!
//! - Select elements with CSS selectors, a node, or a node list
//! - Chain writers: text, markup, classes, attributes, tree edits
//! - Readers collapse to one value for one element, a list otherwise
//! - Build elements with `className` and `text` shortcuts
//!
//! ## Quick Start
//!
//! ```
//! use dome::{Document, OneOrMany};
//!
//! let doc = Document::parse(r#"<ul><li>one</li><li>two</li></ul>"#);
//!
//! doc.get("li")
//!     .unwrap()
//!     .add_class("item")
//!     .set_attr("data-seen", "1");
//!
//! let list = doc.get("ul").unwrap();
//! list.append(&doc.create("li", [("text", "three"), ("className", "item")]))
//!     .unwrap();
//!
//! assert_eq!(doc.get(".item").unwrap().len(), 3);
//! assert_eq!(
//!     doc.get("li").unwrap().text(),
//!     OneOrMany::Many(vec!["one".into(), "two".into(), "three".into()])
//! );
//! ```
//!
//! Writers return the same collection, so calls chain. Readers return
//! [`OneOrMany`]: the bare value for a single element, a list otherwise.

pub mod document;
pub mod dom;
pub mod dome;
pub mod error;
pub mod ops;
pub mod select;
pub(crate) mod util;
pub mod value;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::Document;
pub use dom::NodeId;
pub use dome::Dome;
pub use error::{Error, Result};
pub use ops::{Operation, Read, apply_all};
pub use select::{Target, create, get};
pub use value::{Attributes, ClassNames, OneOrMany};
