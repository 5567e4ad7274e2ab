//! List command - show the bundled recipes.

use anyhow::Result;
use clap::Args;

use authstack_stacks::recipes;

#[derive(Args)]
pub struct ListArgs {}

pub fn execute(_args: ListArgs) -> Result<()> {
    let width = recipes()
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0);

    for recipe in recipes() {
        println!("{:width$}  {}", recipe.name, recipe.description);
    }
    Ok(())
}
