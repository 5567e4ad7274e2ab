//! Synth command - build a recipe and emit its resource graph.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::info;

use authstack_assets::AssetStore;
use authstack_core::EnvValues;
use authstack_graph::StackDefinition;
use authstack_stacks::{recipe, recipes, StackContext};

/// Version of the synthesized document layout.
const FORMAT_VERSION: u32 = 1;

#[derive(Args)]
pub struct SynthArgs {
    /// Name of the recipe to build
    recipe: String,

    /// Stack name to build under (defaults to the recipe name)
    #[arg(short, long)]
    name: Option<String>,

    /// Write the synthesized JSON to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Root directory of the asset store
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

/// Envelope around a synthesized stack definition.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthDocument {
    pub format_version: u32,
    pub generated_at: String,
    pub stack: StackDefinition,
}

impl SynthDocument {
    pub fn new(stack: StackDefinition) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            stack,
        }
    }
}

pub fn execute(args: SynthArgs) -> Result<()> {
    let Some(selected) = recipe(&args.recipe) else {
        let known: Vec<_> = recipes().iter().map(|r| r.name).collect();
        bail!("Unknown recipe '{}' (known: {})", args.recipe, known.join(", "));
    };

    let env = EnvValues::from_process();
    let ctx = StackContext::new(env, AssetStore::new(&args.assets));

    let definition = match &args.name {
        Some(name) => selected.run_as(name, &ctx)?,
        None => selected.run(&ctx)?,
    };
    info!(
        "Built stack '{}' with {} resources",
        definition.name,
        definition.resources.len()
    );

    let document = SynthDocument::new(definition);
    let json = serde_json::to_string_pretty(&document)?;

    match &args.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> StackDefinition {
        let env = EnvValues::from_iter([
            ("DOMAIN", "example.com"),
            ("CLIENT_ID", "c1"),
            ("CLIENT_SECRET", "s1"),
        ]);
        let ctx = StackContext::new(env, AssetStore::new("assets"));
        recipe("basic-native").unwrap().run(&ctx).unwrap()
    }

    #[test]
    fn test_document_roundtrip() {
        let document = SynthDocument::new(definition());
        let json = serde_json::to_string(&document).unwrap();
        let back: SynthDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(back.format_version, FORMAT_VERSION);
        assert_eq!(back.stack, document.stack);
    }

    #[test]
    fn test_document_contains_reference_markers() {
        let document = SynthDocument::new(definition());
        let json = serde_json::to_string(&document).unwrap();
        assert!(json.contains("$ref"));
        assert!(json.contains("\"resource\":\"basic-native-client\""));
        assert!(json.contains("\"attribute\":\"client_id\""));
    }
}
