//! The host document: arena storage, parsing, selector matching and
//! serialization.
//!
//! Nothing in here knows about collections; [`crate::Document`] wraps these
//! primitives and [`crate::Dome`] iterates over them.

pub mod arena;
pub mod selector;
pub mod serialize;
pub mod tree_sink;

pub use arena::{Attribute, NodeArena, NodeData, NodeId};
pub use selector::{DomeSelectors, ElementRef, SelectorQuery};
