//! Extract rustdoc JSON item graphs and render them as Graphviz DOT.
//!
//! The pipeline has three parts: a serde model of the rustdoc JSON document
//! ([`extraction::rustdoc_model`]), a walker that turns the item index into
//! nodes and edges ([`extraction::walker`]), and the sink abstraction the
//! graph structure is declared through ([`sink`]). The bundled
//! [`sink::dot::DotSink`] writes Graphviz DOT text; layout and image
//! rendering are left to Graphviz itself.
//!
//! Nodes are the crate's types and callables; an edge means "this callable
//! consumes (or produces) that type."

pub mod extraction;
pub mod sink;
