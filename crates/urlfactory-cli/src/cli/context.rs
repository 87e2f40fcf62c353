//! Arguments shared by every subcommand.

use clap::Args;
use std::path::PathBuf;
use urlfactory_core::config::FactoryConfig;
use urlfactory_core::query::{parse_param_pair, CurrentUrl};
use urlfactory_core::{BaseParamsUpdate, BuilderParams, UrlFactory};

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ContextArgs {
    /// Config file to read instead of ~/.config/urlfactory/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Current application id (legacy URLs).
    #[arg(long = "app-id", global = true, value_name = "ID")]
    pub application_id: Option<String>,

    /// Current application slug.
    #[arg(long = "app-slug", global = true, value_name = "SLUG")]
    pub application_slug: Option<String>,

    /// Current page id.
    #[arg(long = "page-id", global = true, value_name = "ID")]
    pub page_id: Option<String>,

    /// Current page slug.
    #[arg(long = "page-slug", global = true, value_name = "SLUG")]
    pub page_slug: Option<String>,

    /// Application version; 1 or lower selects legacy id-based URLs.
    #[arg(long = "app-version", global = true, value_name = "N")]
    pub application_version: Option<u32>,

    /// Extra path segment after the base path.
    #[arg(long, global = true)]
    pub suffix: Option<String>,

    /// Shorthand for `--param branch=NAME`; a later --param still wins.
    #[arg(long, global = true)]
    pub branch: Option<String>,

    /// Fragment appended at the very end.
    #[arg(long, global = true)]
    pub hash: Option<String>,

    /// Extra query parameter (repeatable).
    #[arg(long = "param", global = true, value_name = "KEY=VALUE", value_parser = parse_param_pair)]
    pub params: Vec<(String, String)>,

    /// URL of the current page; its branch and embed params are carried over.
    #[arg(long, global = true, value_name = "URL")]
    pub current_url: Option<String>,

    /// Inject the test harness debug param.
    #[arg(long, global = true)]
    pub test_env: bool,
}

impl ContextArgs {
    /// Identifiers of the page the caller is on.
    pub fn defaults_update(&self) -> BaseParamsUpdate {
        BaseParamsUpdate {
            application_id: self.application_id.clone(),
            application_slug: self.application_slug.clone(),
            page_id: self.page_id.clone(),
            page_slug: self.page_slug.clone(),
            application_version: self.application_version,
        }
    }

    pub fn builder_params(&self) -> BuilderParams {
        let branch = self.branch.iter().map(|b| ("branch".to_string(), b.clone()));
        BuilderParams {
            suffix: self.suffix.clone(),
            hash: self.hash.clone(),
            params: branch.chain(self.params.iter().cloned()).collect(),
            ..BuilderParams::default()
        }
    }

    /// Factory from `cfg` with this context's identifiers applied as defaults.
    pub fn factory(&self, cfg: &FactoryConfig) -> UrlFactory {
        let mut factory = UrlFactory::from_config(cfg).with_test_env(cfg.test_env || self.test_env);
        if let Some(url) = &self.current_url {
            factory = factory.with_query_source(CurrentUrl::new(url.clone()));
        }
        factory.update_defaults(self.defaults_update());
        factory
    }
}
