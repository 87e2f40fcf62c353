pub mod config;
pub mod logging;

pub mod factory;
pub mod params;
pub mod query;

pub use factory::UrlFactory;
pub use params::{BaseParams, BaseParamsUpdate, BuilderParams, Mode};
