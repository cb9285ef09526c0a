use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rust2dot::extraction::rustdoc_loader::{load_crate, load_json};
use rust2dot::extraction::walker::GraphWalker;
use rust2dot::sink::dot::DotSink;
use rust2dot::sink::GraphSink;

/// Render Rust crate API graphs as Graphviz DOT.
#[derive(Parser)]
#[command(name = "rust2dot", version, about)]
struct Cli {
    /// Path to a crate directory or a rustdoc JSON file.
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Name of the emitted digraph.
    #[arg(short, long, value_name = "NAME", default_value = "api")]
    name: String,

    /// Input is a pre-generated rustdoc JSON file.
    #[arg(long)]
    json: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.verbose {
        eprintln!("Loading input from: {}", cli.input.display());
    }

    let krate = if cli.json {
        load_json(&cli.input)?
    } else {
        load_crate(&cli.input)?
    };

    let crate_name = krate
        .index
        .get(&krate.root.0)
        .and_then(|item| item.name.clone())
        .unwrap_or_else(|| "unknown".to_string());

    if cli.verbose {
        eprintln!("Crate: {crate_name} (format version {})", krate.format_version);
    }

    let output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut sink = DotSink::new(output_writer, &cli.name);
    let mut walker = GraphWalker::new(&mut sink, &krate);
    walker.walk()?;
    sink.flush()?;

    if !cli.quiet {
        eprintln!(
            "Declared {} nodes and {} edges from {crate_name}",
            sink.node_count(),
            sink.edge_count()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
