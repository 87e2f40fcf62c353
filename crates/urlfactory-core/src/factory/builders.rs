//! Named builders for the editor and viewer views.
//!
//! Each one is [`UrlFactory::build`] with a fixed suffix; all build in edit
//! mode except [`UrlFactory::viewer_url`]. Ids are interpolated verbatim, so
//! an empty id yields an empty path segment.

use super::UrlFactory;
use crate::params::{BuilderParams, Mode};

impl UrlFactory {
    fn build_with_suffix(&self, props: &BuilderParams, suffix: String) -> String {
        let params = BuilderParams {
            suffix: Some(suffix),
            ..props.clone()
        };
        self.build(&params, Mode::Edit)
    }

    pub fn page_list_editor_url(&self, props: &BuilderParams) -> String {
        self.build_with_suffix(props, "pages".to_string())
    }

    pub fn datasources_editor_url(&self, props: &BuilderParams) -> String {
        self.build_with_suffix(props, "datasource".to_string())
    }

    pub fn datasources_editor_id_url(&self, props: &BuilderParams, datasource_id: &str) -> String {
        self.build_with_suffix(props, format!("datasource/{datasource_id}"))
    }

    pub fn js_collection_id_url(&self, props: &BuilderParams, collection_id: &str) -> String {
        self.build_with_suffix(props, format!("jsObjects/{collection_id}"))
    }

    /// `datasources/{selected_tab}`, nesting the caller's own suffix below it.
    pub fn integration_editor_url(&self, props: &BuilderParams, selected_tab: &str) -> String {
        let nested = props.suffix_path();
        self.build_with_suffix(props, format!("datasources/{selected_tab}{nested}"))
    }

    pub fn query_editor_id_url(&self, props: &BuilderParams, query_id: &str) -> String {
        self.build_with_suffix(props, format!("queries/{query_id}"))
    }

    pub fn api_editor_id_url(&self, props: &BuilderParams, api_id: &str) -> String {
        self.build_with_suffix(props, format!("api/{api_id}"))
    }

    pub fn curl_import_page_url(&self, props: &BuilderParams) -> String {
        self.build_with_suffix(props, "api/curl/curl-import".to_string())
    }

    /// Takes only the provider id; every other field comes from the defaults.
    pub fn provider_templates_url(&self, provider_id: &str) -> String {
        self.build_with_suffix(&BuilderParams::default(), format!("api/provider/{provider_id}"))
    }

    pub fn saas_editor_datasource_id_url(
        &self,
        props: &BuilderParams,
        plugin_package_name: &str,
        datasource_id: &str,
    ) -> String {
        self.build_with_suffix(
            props,
            format!("saas/{plugin_package_name}/datasources/{datasource_id}"),
        )
    }

    pub fn saas_editor_api_id_url(
        &self,
        props: &BuilderParams,
        plugin_package_name: &str,
        api_id: &str,
    ) -> String {
        self.build_with_suffix(props, format!("saas/{plugin_package_name}/api/{api_id}"))
    }

    pub fn generate_template_url(&self, props: &BuilderParams) -> String {
        self.build_with_suffix(props, self.routes.gen_template_url.clone())
    }

    pub fn generate_template_form_url(&self, props: &BuilderParams) -> String {
        let suffix = format!(
            "{}{}",
            self.routes.gen_template_url, self.routes.gen_template_form_route
        );
        self.build_with_suffix(props, suffix)
    }

    pub fn onboarding_check_list_url(&self, props: &BuilderParams) -> String {
        self.build_with_suffix(props, "checklist".to_string())
    }

    /// Editor root for the page.
    pub fn builder_url(&self, props: &BuilderParams) -> String {
        self.build(props, Mode::Edit)
    }

    /// Published view of the page.
    pub fn viewer_url(&self, props: &BuilderParams) -> String {
        self.build(props, Mode::Published)
    }
}
