use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::params::BaseParams;

/// Template generation route constants (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Suffix of the template generator page.
    pub gen_template_url: String,
    /// Appended to `gen_template_url` for the generator's form view.
    pub gen_template_form_route: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            gen_template_url: "generate-page".to_string(),
            gen_template_form_route: "/form".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/urlfactory/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Inject the `a=b` debug query pair into every built URL.
    #[serde(default)]
    pub test_env: bool,
    /// Identifiers used when a call leaves them out.
    #[serde(default)]
    pub defaults: BaseParams,
    #[serde(default)]
    pub routes: RouteConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlfactory")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FactoryConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FactoryConfig> {
    if !path.exists() {
        let default_cfg = FactoryConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Read and parse an existing config file.
pub fn load_from(path: &Path) -> Result<FactoryConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FactoryConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
