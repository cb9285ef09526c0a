//! Rustdoc JSON ingestion and graph extraction.

pub mod resolve;
pub mod rustdoc_loader;
pub mod rustdoc_model;
pub mod walker;
