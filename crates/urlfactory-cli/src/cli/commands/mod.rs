//! CLI command handlers.

mod defaults;
mod render;

pub use defaults::run_defaults;
pub use render::run_url;

#[cfg(test)]
pub use render::render_url;
