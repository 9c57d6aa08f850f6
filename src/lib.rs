//
// lib.rs
// Dicom-Tree-rs
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//
// Thales Matheus Mendonça Santos - October 2026

// Decoder -> tree builder -> display; the CLI wires them together.
pub mod cli;
pub mod decode;
pub mod element;
pub mod render;
pub mod tree;
pub mod web;

pub use cli::{run as run_cli, Cli, Commands};
pub use decode::{decode_file, DecodeError};
pub use element::{ElementValue, TaggedElement, PIXEL_DATA_NAME};
pub use tree::{build, TreeNode};
