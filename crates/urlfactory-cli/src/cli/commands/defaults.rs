//! `urlfactory defaults` – print the effective default identifiers.

use anyhow::{Context, Result};
use urlfactory_core::config::FactoryConfig;

use crate::cli::ContextArgs;

pub fn run_defaults(cfg: &FactoryConfig, context: &ContextArgs) -> Result<()> {
    let factory = context.factory(cfg);
    let json = serde_json::to_string_pretty(factory.defaults()).context("serialize defaults")?;
    println!("{json}");
    Ok(())
}
