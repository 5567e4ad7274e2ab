//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod list;
pub mod synth;

/// authstack - declarative identity-platform provisioning stacks
#[derive(Parser)]
#[command(name = "authstack")]
#[command(version, about = "Declarative identity-platform provisioning stacks")]
#[command(long_about = r#"
authstack builds identity-platform resource graphs from bundled stack
recipes. Each recipe validates its required environment inputs, constructs
the provider binding, and emits a dependency-ordered set of resource
descriptors for an external provisioning engine to apply.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Unknown recipe
  3 - Missing environment input
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the bundled stack recipes
    List(list::ListArgs),

    /// Build a stack recipe and write its resource graph as JSON
    Synth(synth::SynthArgs),
}
