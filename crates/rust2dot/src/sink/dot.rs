use std::io::Write;

use super::{GraphSink, NodeShape};

/// Graphviz DOT sink. Streams node and edge statements as they are declared.
pub struct DotSink<W: Write> {
    writer: W,
    graph_name: String,
    nodes: u64,
    edges: u64,
    header_written: bool,
    footer_written: bool,
}

impl<W: Write> DotSink<W> {
    pub fn new(writer: W, graph_name: &str) -> Self {
        Self {
            writer,
            graph_name: graph_name.to_string(),
            nodes: 0,
            edges: 0,
            header_written: false,
            footer_written: false,
        }
    }

    /// Write the `digraph` opening (once, before the first statement).
    fn write_header(&mut self) {
        if self.header_written {
            return;
        }
        self.header_written = true;
        writeln!(self.writer, "digraph {} {{", quote(&self.graph_name)).unwrap();
    }
}

impl<W: Write> GraphSink for DotSink<W> {
    fn declare_node(&mut self, id: &str, label: &str, shape: NodeShape) {
        self.write_header();
        writeln!(
            self.writer,
            "    {} [label={}, shape={}];",
            quote(&escape_id(id)),
            quote(label),
            shape.as_str()
        )
        .unwrap();
        self.nodes += 1;
    }

    fn declare_edge(&mut self, from: &str, to: &str) {
        self.write_header();
        writeln!(
            self.writer,
            "    {} -> {};",
            quote(&escape_id(from)),
            quote(&escape_id(to))
        )
        .unwrap();
        self.edges += 1;
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.write_header();
        if !self.footer_written {
            self.footer_written = true;
            writeln!(self.writer, "}}")?;
        }
        self.writer.flush()
    }

    fn node_count(&self) -> u64 {
        self.nodes
    }

    fn edge_count(&self) -> u64 {
        self.edges
    }
}

/// Rewrite the identifier separator into something DOT accepts as part of a
/// node id. Graphviz reads `:` in a node id as port syntax, so `0:12` and
/// `a::b` both need the substitution; display labels keep the original text.
fn escape_id(id: &str) -> String {
    id.replace(':', "___")
}

/// Wrap a string as a DOT double-quoted id.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
