//! Builder parameters and the identifiers a factory falls back to.

use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

/// Application version that still uses id-only paths.
pub const LEGACY_URL_APP_VERSION: u32 = 1;
/// First application version with slug-based paths.
pub const SLUG_URL_APP_VERSION: u32 = 2;

/// Whether the built path points at the editor or the published viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Edit,
    Published,
}

impl Mode {
    /// Path segment appended right after the base path.
    pub fn path_segment(self) -> &'static str {
        match self {
            Mode::Edit => "/edit",
            Mode::Published => "",
        }
    }
}

/// Identifiers of the active application and page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseParams {
    pub application_id: String,
    pub application_slug: String,
    pub page_id: String,
    pub page_slug: String,
    /// `<= 1` selects the legacy id-based scheme.
    pub application_version: u32,
}

impl Default for BaseParams {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            application_slug: String::new(),
            page_id: String::new(),
            page_slug: String::new(),
            application_version: LEGACY_URL_APP_VERSION,
        }
    }
}

impl BaseParams {
    /// True when paths use `/applications/{id}/pages/{pageId}`.
    pub fn uses_legacy_urls(&self) -> bool {
        self.application_version <= LEGACY_URL_APP_VERSION
    }

    /// Shallow merge: every field present in `update` replaces the stored one.
    pub fn apply(&mut self, update: BaseParamsUpdate) {
        if let Some(v) = update.application_id {
            self.application_id = v;
        }
        if let Some(v) = update.application_slug {
            self.application_slug = v;
        }
        if let Some(v) = update.page_id {
            self.page_id = v;
        }
        if let Some(v) = update.page_slug {
            self.page_slug = v;
        }
        if let Some(v) = update.application_version {
            self.application_version = v;
        }
    }
}

/// Partial [`BaseParams`] for `UrlFactory::update_defaults`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseParamsUpdate {
    pub application_id: Option<String>,
    pub application_slug: Option<String>,
    pub page_id: Option<String>,
    pub page_slug: Option<String>,
    pub application_version: Option<u32>,
}

impl BaseParamsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-call parameters. Anything left unset falls back to the factory
/// defaults (base fields) or is omitted (suffix, branch, hash, params).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderParams {
    pub application_id: Option<String>,
    pub application_slug: Option<String>,
    pub page_id: Option<String>,
    pub page_slug: Option<String>,
    pub application_version: Option<u32>,
    pub suffix: Option<String>,
    /// Accepted but not used when building; pass `branch` in `params` instead.
    pub branch: Option<String>,
    pub hash: Option<String>,
    /// Extra query parameters; these win over everything else.
    pub params: QueryParams,
}

impl BuilderParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_application_id(mut self, id: impl Into<String>) -> Self {
        self.application_id = Some(id.into());
        self
    }

    pub fn with_application_slug(mut self, slug: impl Into<String>) -> Self {
        self.application_slug = Some(slug.into());
        self
    }

    pub fn with_page_id(mut self, id: impl Into<String>) -> Self {
        self.page_id = Some(id.into());
        self
    }

    pub fn with_page_slug(mut self, slug: impl Into<String>) -> Self {
        self.page_slug = Some(slug.into());
        self
    }

    pub fn with_application_version(mut self, version: u32) -> Self {
        self.application_version = Some(version);
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Resolves the five base fields against `defaults`.
    ///
    /// The version falls back only when absent; ids and slugs also fall back
    /// when present but empty.
    pub fn resolve(&self, defaults: &BaseParams) -> BaseParams {
        BaseParams {
            application_id: non_empty_or(&self.application_id, &defaults.application_id),
            application_slug: non_empty_or(&self.application_slug, &defaults.application_slug),
            page_id: non_empty_or(&self.page_id, &defaults.page_id),
            page_slug: non_empty_or(&self.page_slug, &defaults.page_slug),
            application_version: self
                .application_version
                .unwrap_or(defaults.application_version),
        }
    }

    /// The suffix as a path component (`/{suffix}`), empty when unset.
    pub fn suffix_path(&self) -> String {
        prefixed(&self.suffix, '/')
    }

    /// The hash as a fragment (`#{hash}`), empty when unset.
    pub fn hash_path(&self) -> String {
        prefixed(&self.hash, '#')
    }
}

fn non_empty_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn prefixed(value: &Option<String>, prefix: char) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => format!("{prefix}{v}"),
        _ => String::new(),
    }
}
