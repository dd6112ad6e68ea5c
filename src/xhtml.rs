//! Markup tree construction and XHTML document serialization.
//!
//! # Overview
//! - [`XhtmlNode`](node::XhtmlNode): one element; tag, attributes, ordered children.
//! - [`XhtmlBuilder`](builder::XhtmlBuilder): accumulates head/body nodes plus
//!   document metadata and serializes them into namespaced XHTML text.

pub mod builder;
pub mod node;
