//
// cli.rs
// Dicom-Tree-rs
//
// Defines the CLI surface with Clap and dispatches to the decoder, tree builder and display layers.
//
// Thales Matheus Mendonça Santos - October 2026

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::tree::{self, TreeNode};
use crate::{decode, render, web};

/// Command-line interface glue code: defines the available verbs and dispatches to modules.
#[derive(Parser)]
#[command(name = "dicom-tree")]
#[command(about = "View a DICOM file as an expandable tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the tree view in the browser (blocks until Ctrl-C)
    View {
        file: PathBuf,
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the tree to the terminal
    Print {
        file: PathBuf,
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Write the tree as JSON
    Json {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run() -> Result<()> {
    // Parse the raw CLI arguments once and dispatch to a subcommand handler.
    let cli = Cli::parse();

    match cli.command {
        Commands::View { file, host, port } => {
            let tree = load_tree(&file)?;
            let title = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            web::serve(tree, &title, &host, port).await?
        }
        Commands::Print { file, max_depth } => {
            let tree = load_tree(&file)?;
            render::print_tree(&tree, max_depth);
        }
        Commands::Json { file, output } => {
            let tree = load_tree(&file)?;
            let json = tree::to_json(&tree).context("Failed to serialize tree")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json).context("Failed to write JSON to file")?;
                    println!("JSON saved to {:?}", path);
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}

/// Decode `path` and build its tree; decode failures abort the run.
pub fn load_tree(path: &Path) -> Result<TreeNode> {
    let elements = decode::decode_file(path).context("Failed to open DICOM file")?;
    Ok(tree::build(&elements))
}
