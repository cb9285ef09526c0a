//! Load and deserialize rustdoc JSON documents.

use std::path::Path;
use std::process::Command;

use super::rustdoc_model::Crate;

/// Errors that can occur while producing a document.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    RustdocFailed(String),
    CrateNameNotFound,
    OutputNotFound(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {e}"),
            LoadError::Json(e) => write!(f, "JSON parse error: {e}"),
            LoadError::RustdocFailed(msg) => write!(f, "rustdoc failed: {msg}"),
            LoadError::CrateNameNotFound => {
                write!(f, "could not determine crate name from Cargo.toml")
            }
            LoadError::OutputNotFound(path) => {
                write!(f, "rustdoc JSON output not found at: {path}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// Load a pre-generated rustdoc JSON file from disk.
pub fn load_json(path: &Path) -> Result<Crate, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let krate: Crate = serde_json::from_str(&content)?;
    Ok(krate)
}

/// Document a crate directory and load the result.
///
/// Runs `cargo +nightly rustdoc` with JSON output and picks the document up
/// from `target/doc/<crate>.json`, the path rustdoc writes it to.
pub fn load_crate(crate_dir: &Path) -> Result<Crate, LoadError> {
    let cargo_toml = std::fs::read_to_string(crate_dir.join("Cargo.toml"))?;
    let crate_name = package_name(&cargo_toml).ok_or(LoadError::CrateNameNotFound)?;

    let output = Command::new("cargo")
        .args([
            "+nightly",
            "rustdoc",
            "--",
            "-Z",
            "unstable-options",
            "--output-format",
            "json",
        ])
        .current_dir(crate_dir)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LoadError::RustdocFailed(stderr.to_string()));
    }

    // The JSON file is named after the crate, with dashes normalized.
    let json_name = crate_name.replace('-', "_");
    let json_path = crate_dir.join(format!("target/doc/{json_name}.json"));

    if !json_path.exists() {
        return Err(LoadError::OutputNotFound(json_path.display().to_string()));
    }

    load_json(&json_path)
}

/// Pull the package name out of Cargo.toml content (line scan, no TOML
/// parser: `name = "..."` under any table is good enough here).
fn package_name(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("name") {
            let rest = rest.trim_start();
            if let Some(value) = rest.strip_prefix('=') {
                let name = value.trim().trim_matches('"').trim_matches('\'');
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }
    None
}
