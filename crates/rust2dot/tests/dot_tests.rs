//! Tests for the Graphviz DOT sink.

use rust2dot::sink::dot::DotSink;
use rust2dot::sink::{GraphSink, NodeShape};

// ---------------------------------------------------------------------------
// Framing
// ---------------------------------------------------------------------------

#[test]
fn output_is_wrapped_in_a_digraph() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.declare_node("0:1", "crate::S", NodeShape::Ellipse);
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("digraph \"api\" {\n"), "got: {out}");
    assert!(out.trim_end().ends_with('}'), "got: {out}");
}

#[test]
fn empty_graph_is_still_valid() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "digraph \"api\" {\n}\n");
}

#[test]
fn graph_name_is_quoted() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "my api");
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("digraph \"my api\" {"), "got: {out}");
}

#[test]
fn flushing_twice_writes_a_single_footer() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.declare_node("0:1", "a", NodeShape::Ellipse);
    sink.flush().unwrap();
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out.matches('}').count(), 1, "got: {out}");
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[test]
fn node_statement_escapes_id_but_not_label() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.declare_node("0:12", "crate::Point", NodeShape::Ellipse);
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(
        out.contains("    \"0___12\" [label=\"crate::Point\", shape=ellipse];"),
        "got: {out}"
    );
    // The raw separator must not survive in the node id position.
    assert!(!out.contains("\"0:12\""), "got: {out}");
}

#[test]
fn callable_nodes_are_boxes() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.declare_node("0:3", "crate::origin", NodeShape::Box);
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("shape=box"), "got: {out}");
}

#[test]
fn edge_statement_escapes_both_endpoints() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.declare_edge("0:1", "0:3");
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("    \"0___1\" -> \"0___3\";"), "got: {out}");
}

#[test]
fn label_quotes_and_backslashes_are_escaped() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.declare_node("0:1", "weird \"name\" \\ here", NodeShape::Ellipse);
    sink.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(
        out.contains("label=\"weird \\\"name\\\" \\\\ here\""),
        "got: {out}"
    );
}

#[test]
fn counts_track_declarations() {
    let mut buf = Vec::new();
    let mut sink = DotSink::new(&mut buf, "api");
    sink.declare_node("0:1", "a", NodeShape::Ellipse);
    sink.declare_node("0:1", "a", NodeShape::Ellipse);
    sink.declare_edge("0:1", "0:2");
    assert_eq!(sink.node_count(), 2);
    assert_eq!(sink.edge_count(), 1);
}
