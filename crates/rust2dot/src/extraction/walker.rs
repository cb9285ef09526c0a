//! Item graph extraction: walks a rustdoc index and declares nodes and
//! edges through a [`GraphSink`].
//!
//! The walk starts at the document root and recurses through containment:
//! modules into their members, structs and enums into their impl blocks,
//! impl blocks into their methods. Types and callables become nodes; every
//! parameter or return type that normalizes to a crate-local item becomes
//! an edge between that type and the callable.
//!
//! Dispatch is closed-world: every kind a document can contain must have an
//! explicit rule, and an item with no rule aborts the walk. All errors are
//! fatal; there is no mode that skips a malformed subtree and continues.

use std::collections::HashSet;

use crate::sink::{GraphSink, NodeShape};

use super::resolve::type_identity;
use super::rustdoc_model::{Crate, FnDecl, Item, ItemEnum};

// ---------------------------------------------------------------------------
// WalkError
// ---------------------------------------------------------------------------

/// Errors that abort a walk.
#[derive(Debug)]
pub enum WalkError {
    /// An id was referenced but has no entry in the index.
    MissingItem { id: String },
    /// An item that needs a node has neither a path entry nor a name.
    MissingName { id: String },
    /// Dispatch reached an item kind with no rule.
    UnhandledKind { id: String, kind: &'static str },
    /// The containment structure loops back on itself.
    CycleDetected { id: String },
}

impl std::fmt::Display for WalkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkError::MissingItem { id } => {
                write!(f, "item `{id}` is not present in the index")
            }
            WalkError::MissingName { id } => {
                write!(f, "item `{id}` has no path entry and no name")
            }
            WalkError::UnhandledKind { id, kind } => {
                write!(f, "no rule for item `{id}` of kind `{kind}`")
            }
            WalkError::CycleDetected { id } => {
                write!(f, "containment cycle through item `{id}`")
            }
        }
    }
}

impl std::error::Error for WalkError {}

// ---------------------------------------------------------------------------
// GraphWalker
// ---------------------------------------------------------------------------

/// Walks a rustdoc [`Crate`] index and declares nodes and edges via a
/// [`GraphSink`].
///
/// The walker keeps no state between calls beyond the accumulating sink; a
/// type referenced from two places is simply declared twice, which sinks
/// must treat as harmless.
pub struct GraphWalker<'a, S: GraphSink> {
    sink: &'a mut S,
    krate: &'a Crate,
    /// Ids on the current visit stack. Containment is a tree in well-formed
    /// documents; this guard turns a malformed cycle into a fatal error
    /// instead of a stack overflow.
    visiting: HashSet<String>,
}

impl<'a, S: GraphSink> GraphWalker<'a, S> {
    pub fn new(sink: &'a mut S, krate: &'a Crate) -> Self {
        Self {
            sink,
            krate,
            visiting: HashSet::new(),
        }
    }

    /// Walk the whole document starting at its root item.
    pub fn walk(&mut self) -> Result<(), WalkError> {
        let root = self.krate.root.0.clone();
        self.visit(&root)
    }

    /// Visit one item and everything it transitively contains.
    pub fn visit(&mut self, id: &str) -> Result<(), WalkError> {
        if !self.visiting.insert(id.to_string()) {
            return Err(WalkError::CycleDetected { id: id.to_string() });
        }
        let result = self.dispatch(id);
        self.visiting.remove(id);
        result
    }

    fn dispatch(&mut self, id: &str) -> Result<(), WalkError> {
        let krate = self.krate;
        let item = krate.index.get(id).ok_or_else(|| WalkError::MissingItem {
            id: id.to_string(),
        })?;

        match &item.inner {
            // An impl block is walked like a module: no node of its own, so
            // its methods hang directly off the enclosing type's subgraph.
            ItemEnum::Module { items } | ItemEnum::Impl { items } => {
                for child in items {
                    self.visit(&child.0)?;
                }
                Ok(())
            }
            ItemEnum::Struct { impls } | ItemEnum::Enum { impls } => {
                self.declare_item_node(id, item, NodeShape::Ellipse)?;
                for impl_id in impls {
                    self.visit(&impl_id.0)?;
                }
                Ok(())
            }
            ItemEnum::Function { decl } => self.visit_callable(id, item, decl),
            // Pass-through declarations, nothing to graph.
            ItemEnum::Import {} | ItemEnum::Typedef {} => Ok(()),
            other => Err(WalkError::UnhandledKind {
                id: id.to_string(),
                kind: other.kind_name(),
            }),
        }
    }

    /// Declare the callable's node plus its data-flow edges: one inbound
    /// edge per parameter of crate-local type, at most one outbound edge
    /// for the return type.
    fn visit_callable(&mut self, id: &str, item: &Item, decl: &FnDecl) -> Result<(), WalkError> {
        self.declare_item_node(id, item, NodeShape::Box)?;

        for (_, param_ty) in &decl.inputs {
            if let Some(type_id) = type_identity(param_ty) {
                self.sink.declare_edge(&type_id.0, id);
            }
        }
        if let Some(output) = &decl.output {
            if let Some(type_id) = type_identity(output) {
                self.sink.declare_edge(id, &type_id.0);
            }
        }
        Ok(())
    }

    /// Declare a node for `id`, labelled with its fully-qualified path when
    /// the document has one, or its bare name otherwise.
    fn declare_item_node(
        &mut self,
        id: &str,
        item: &Item,
        shape: NodeShape,
    ) -> Result<(), WalkError> {
        let label = match self.krate.paths.get(id) {
            Some(summary) => summary.path.join("::"),
            None => item.name.clone().ok_or_else(|| WalkError::MissingName {
                id: id.to_string(),
            })?,
        };
        self.sink.declare_node(id, &label, shape);
        Ok(())
    }
}
