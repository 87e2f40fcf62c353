//! CLI for the urlfactory router path builder.

mod commands;
mod context;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlfactory_core::config::{self, FactoryConfig};

pub use context::ContextArgs;

use commands::{run_defaults, run_url};

/// Top-level CLI: one subcommand per named builder.
#[derive(Debug, Parser)]
#[command(name = "urlfactory")]
#[command(about = "Build client-side router paths for application pages", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub context: ContextArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Base path plus the --suffix given, if any.
    Build {
        /// Build the published (viewer) path instead of the editor path.
        #[arg(long)]
        published: bool,
    },

    /// Page list editor.
    PageList,

    /// Datasource editor root.
    Datasources,

    /// Editor for one datasource.
    Datasource {
        /// Datasource identifier.
        id: String,
    },

    /// Editor for one JS collection.
    JsCollection {
        /// Collection identifier.
        id: String,
    },

    /// Integration editor tab; --suffix nests below the tab.
    Integration {
        /// Selected tab, e.g. NEW or ACTIVE.
        tab: String,
    },

    /// Query editor.
    Query {
        /// Query identifier.
        id: String,
    },

    /// API editor.
    Api {
        /// API identifier.
        id: String,
    },

    /// cURL import page.
    CurlImport,

    /// Provider templates; ignores --suffix, --branch, --hash and --param.
    ProviderTemplates {
        /// Provider identifier.
        provider_id: String,
    },

    /// SaaS plugin datasource editor.
    SaasDatasource {
        /// Plugin package name, e.g. google-sheets-plugin.
        plugin_package_name: String,
        /// Datasource identifier.
        datasource_id: String,
    },

    /// SaaS plugin API editor.
    SaasApi {
        /// Plugin package name.
        plugin_package_name: String,
        /// API identifier.
        api_id: String,
    },

    /// Template generator page.
    GenerateTemplate,

    /// Template generator form.
    GenerateTemplateForm,

    /// Onboarding checklist.
    Checklist,

    /// Editor root for the page.
    Builder,

    /// Published view of the page.
    Viewer,

    /// Print the effective default identifiers as JSON.
    Defaults,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(&cli.context)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match &cli.command {
            CliCommand::Defaults => run_defaults(&cfg, &cli.context)?,
            command => run_url(&cfg, &cli.context, command)?,
        }

        Ok(())
    }
}

fn load_config(context: &ContextArgs) -> Result<FactoryConfig> {
    match &context.config {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
