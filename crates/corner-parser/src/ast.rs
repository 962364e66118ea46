//! Abstract syntax tree of a Corner diagram.
//!
//! The parser is the only producer of these types in normal operation; the
//! `with_*` builders exist so trees can be written out by hand in tests and
//! by tools that generate diagrams programmatically.
//!
//! Identifier and attribute payloads are [`Spanned`], so equality between
//! trees compares text only and ignores where it came from.

use crate::span::{Span, Spanned};

/// The root of a parsed diagram: its top-level node declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    pub children: Vec<Node>,
}

impl Diagram {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Every node declaration, nested ones included, in pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(Node::pre_order)
    }

    /// Number of node declarations at any depth.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of edge declarations at any depth.
    pub fn edge_count(&self) -> usize {
        self.nodes().map(|node| node.edges.len()).sum()
    }
}

/// A named node with attributes, outgoing edges and nested nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: Spanned<String>,
    pub attributes: Vec<NodeAttribute>,
    pub edges: Vec<EdgeDecl>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with an empty body.
    pub fn new(id: impl Into<Spanned<String>>) -> Self {
        Self {
            id: id.into(),
            attributes: Vec::new(),
            edges: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: NodeAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add an edge from this node to `target`.
    pub fn with_edge(mut self, target: impl Into<Spanned<String>>) -> Self {
        let edge = EdgeDecl::new(self.id.clone(), target);
        self.edges.push(edge);
        self
    }

    /// Add a fully built edge. Its `from` is expected to equal this node's id.
    pub fn with_edge_decl(mut self, edge: EdgeDecl) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// This node followed by its descendants, in pre-order.
    pub fn pre_order(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(Node::pre_order)))
    }

    pub fn span(&self) -> Span {
        self.id.span()
    }
}

/// A directed edge from the enclosing node to a target id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl {
    /// Always the id of the node this edge is declared in.
    pub from: Spanned<String>,
    pub to: Spanned<String>,
    pub attributes: Vec<EdgeAttribute>,
}

impl EdgeDecl {
    pub fn new(from: impl Into<Spanned<String>>, to: impl Into<Spanned<String>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: EdgeAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn span(&self) -> Span {
        self.to.span()
    }
}

/// Attributes allowed in a node body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAttribute {
    /// `color: <name>`
    Color(Spanned<String>),
    /// `label: <text>` or `desc: <text>`
    Description(Spanned<String>),
}

impl NodeAttribute {
    pub fn color(value: impl Into<Spanned<String>>) -> Self {
        Self::Color(value.into())
    }

    pub fn description(value: impl Into<Spanned<String>>) -> Self {
        Self::Description(value.into())
    }

    pub fn value(&self) -> &Spanned<String> {
        match self {
            Self::Color(value) | Self::Description(value) => value,
        }
    }
}

/// Attributes allowed in an edge body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeAttribute {
    /// `color: <name>`
    Color(Spanned<String>),
    /// `label: <text>` or `desc: <text>`
    Label(Spanned<String>),
}

impl EdgeAttribute {
    pub fn color(value: impl Into<Spanned<String>>) -> Self {
        Self::Color(value.into())
    }

    pub fn label(value: impl Into<Spanned<String>>) -> Self {
        Self::Label(value.into())
    }

    pub fn value(&self) -> &Spanned<String> {
        match self {
            Self::Color(value) | Self::Label(value) => value,
        }
    }
}
