//! aom-inspect - Render an AOM snapshot the way the inspector shows it

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fos_devtools::{AomInspector, InspectorConfig};
use tracing_subscriber::EnvFilter;

/// Render an AOM snapshot as plain text or JSON.
#[derive(Parser, Debug)]
#[command(name = "aom-inspect", version, about)]
struct Args {
    /// AOM snapshot (JSON)
    snapshot: PathBuf,

    /// Focus the node with this key before rendering
    #[arg(long)]
    focus: Option<String>,

    /// Expand a collapsed label (repeatable)
    #[arg(long = "expand", value_name = "KEY")]
    expand: Vec<String>,

    /// Only print the output of the node with this key
    #[arg(long)]
    inspect: Option<String>,

    /// Print the AOM tree outline instead of the rendered view
    #[arg(long, value_name = "DEPTH")]
    tree: Option<usize>,

    /// Output the presentation tree as JSON
    #[arg(long)]
    json: bool,

    /// Output compact JSON instead of pretty-printing
    #[arg(long, requires = "json")]
    compact: bool,

    /// Inspector configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InspectorConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => InspectorConfig::default(),
    };

    let mut inspector = AomInspector::with_config(config);
    inspector
        .load_file(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;
    tracing::info!("Loaded {} AOM nodes from {}", inspector.tree().len(), args.snapshot.display());

    if let Some(depth) = args.tree {
        print!("{}", inspector.get_aom_tree(depth));
        return Ok(());
    }

    if let Some(key) = &args.focus {
        inspector.focus(key)?;
    }
    for key in &args.expand {
        inspector.expand(key)?;
    }

    let content = match &args.inspect {
        Some(key) => match inspector.inspect(key)? {
            Some(content) => content,
            None => {
                tracing::warn!("Node {} produced no output", key);
                return Ok(());
            }
        },
        None => inspector.render(),
    };

    if args.json {
        let json = if args.compact {
            serde_json::to_string(&content)?
        } else {
            serde_json::to_string_pretty(&content)?
        };
        println!("{}", json);
    } else {
        println!("{}", content.to_plain_text().trim_end());
    }

    Ok(())
}
