//! Serializable operations over a collection.
//!
//! An [`Operation`] is one chainable writer from [`Dome`] in data form, so a
//! sequence of edits can come from a command line or a JSON script. A
//! [`Read`] names one of the readers.

use std::str::FromStr;

use tracing::debug;

use crate::dome::Dome;
use crate::error::{Error, Result};
use crate::value::{Attributes, OneOrMany};

/// One edit applied to every node of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Operation {
    SetText { value: String },
    SetHtml { value: String },
    AddClass { names: Vec<String> },
    RemoveClass { name: String },
    SetAttr { name: String, value: String },
    RemoveAttr { name: String },
    /// Parse markup and append the result to every node.
    AppendHtml { html: String },
    /// Parse markup and prepend the result to every node.
    PrependHtml { html: String },
    /// Create an element (see [`crate::create`]) and append it to every node.
    AppendElement {
        tag: String,
        #[cfg_attr(feature = "serde", serde(default))]
        attributes: Attributes,
    },
    Remove,
}

impl Operation {
    pub fn apply(&self, dome: &Dome<'_>) -> Result<()> {
        let doc = dome.document();
        match self {
            Operation::SetText { value } => {
                dome.set_text(value);
            }
            Operation::SetHtml { value } => {
                dome.set_html(value);
            }
            Operation::AddClass { names } => {
                dome.add_class(names);
            }
            Operation::RemoveClass { name } => {
                dome.remove_class(name);
            }
            Operation::SetAttr { name, value } => {
                dome.set_attr(name, value);
            }
            Operation::RemoveAttr { name } => {
                dome.remove_attr(name);
            }
            Operation::AppendHtml { html } => {
                dome.append(&doc.fragment(html))?;
            }
            Operation::PrependHtml { html } => {
                dome.prepend(&doc.fragment(html))?;
            }
            Operation::AppendElement { tag, attributes } => {
                dome.append(&doc.create(tag, attributes.iter()))?;
            }
            Operation::Remove => {
                dome.remove();
            }
        }
        Ok(())
    }
}

/// Apply operations in order, stopping at the first failure.
pub fn apply_all(dome: &Dome<'_>, operations: &[Operation]) -> Result<()> {
    for (i, op) in operations.iter().enumerate() {
        debug!(index = i, ?op, nodes = dome.len(), "applying operation");
        op.apply(dome)?;
    }
    Ok(())
}

/// Load a JSON array of operations from a file.
#[cfg(feature = "serde")]
pub fn load_script(path: impl AsRef<std::path::Path>) -> Result<Vec<Operation>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// A reader over a collection, parsed from `text`, `html` or `attr:NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Read {
    Text,
    Html,
    Attr(String),
}

impl Read {
    pub fn read(&self, dome: &Dome<'_>) -> OneOrMany<Option<String>> {
        match self {
            Read::Text => dome.text().map(Some),
            Read::Html => dome.html().map(Some),
            Read::Attr(name) => dome.attr(name),
        }
    }
}

impl FromStr for Read {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Read::Text),
            "html" => Ok(Read::Html),
            _ => match s.strip_prefix("attr:") {
                Some(name) if !name.is_empty() => Ok(Read::Attr(name.to_string())),
                _ => Err(Error::UnknownRead(s.to_string())),
            },
        }
    }
}
