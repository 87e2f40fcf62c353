//! Path-building subcommands: print one URL to stdout.

use anyhow::{bail, Result};
use urlfactory_core::config::FactoryConfig;
use urlfactory_core::Mode;

use crate::cli::{CliCommand, ContextArgs};

pub fn run_url(cfg: &FactoryConfig, context: &ContextArgs, command: &CliCommand) -> Result<()> {
    let url = render_url(cfg, context, command)?;
    println!("{url}");
    Ok(())
}

/// Builds the URL `command` names.
pub fn render_url(cfg: &FactoryConfig, context: &ContextArgs, command: &CliCommand) -> Result<String> {
    let factory = context.factory(cfg);
    let props = context.builder_params();

    let url = match command {
        CliCommand::Build { published } => {
            let mode = if *published { Mode::Published } else { Mode::Edit };
            factory.build(&props, mode)
        }
        CliCommand::PageList => factory.page_list_editor_url(&props),
        CliCommand::Datasources => factory.datasources_editor_url(&props),
        CliCommand::Datasource { id } => factory.datasources_editor_id_url(&props, id),
        CliCommand::JsCollection { id } => factory.js_collection_id_url(&props, id),
        CliCommand::Integration { tab } => factory.integration_editor_url(&props, tab),
        CliCommand::Query { id } => factory.query_editor_id_url(&props, id),
        CliCommand::Api { id } => factory.api_editor_id_url(&props, id),
        CliCommand::CurlImport => factory.curl_import_page_url(&props),
        CliCommand::ProviderTemplates { provider_id } => factory.provider_templates_url(provider_id),
        CliCommand::SaasDatasource {
            plugin_package_name,
            datasource_id,
        } => factory.saas_editor_datasource_id_url(&props, plugin_package_name, datasource_id),
        CliCommand::SaasApi {
            plugin_package_name,
            api_id,
        } => factory.saas_editor_api_id_url(&props, plugin_package_name, api_id),
        CliCommand::GenerateTemplate => factory.generate_template_url(&props),
        CliCommand::GenerateTemplateForm => factory.generate_template_form_url(&props),
        CliCommand::Checklist => factory.onboarding_check_list_url(&props),
        CliCommand::Builder => factory.builder_url(&props),
        CliCommand::Viewer => factory.viewer_url(&props),
        CliCommand::Defaults => bail!("`defaults` does not build a URL"),
    };

    tracing::info!("{:?} -> {}", command, url);
    Ok(url)
}
