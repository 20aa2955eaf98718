// file: src/exporter/mod.rs
// description: exporter module exports and public api
// reference: internal module structure

pub mod console;
pub mod json;

pub use console::ConsoleRenderer;
pub use json::JsonExporter;
