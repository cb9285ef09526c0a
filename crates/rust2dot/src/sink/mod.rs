//! Graph sink abstraction: accumulates declared nodes and edges for
//! downstream rendering.

pub mod dot;

/// Shape classifier for declared nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Types: structs and enums.
    Ellipse,
    /// Callables: functions and methods.
    Box,
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeShape::Ellipse => "ellipse",
            NodeShape::Box => "box",
        }
    }
}

/// Trait for accumulating graph structure in an output format.
///
/// Node identity is the raw document identifier; sinks escape it as their
/// syntax requires and emit the label untouched. Declaring the same node or
/// edge twice is not an error: within one run every declaration for an
/// identifier is identical, so duplicates are rendering-harmless.
pub trait GraphSink {
    /// Declare a node with a display label and shape.
    fn declare_node(&mut self, id: &str, label: &str, shape: NodeShape);
    /// Declare a directed edge between two raw identifiers.
    fn declare_edge(&mut self, from: &str, to: &str);
    /// Complete the document and flush buffered output.
    fn flush(&mut self) -> std::io::Result<()>;
    /// Number of node declarations so far.
    fn node_count(&self) -> u64;
    /// Number of edge declarations so far.
    fn edge_count(&self) -> u64;
}
