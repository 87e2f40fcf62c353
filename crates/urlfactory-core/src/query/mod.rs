//! Query string handling.
//!
//! Holds the ordered parameter map the factory merges, the serializer that
//! turns it into `?k=v&...`, and the [`QuerySource`] seam through which the
//! factory reads the current URL's query.

mod error;
mod params;
mod serialize;
mod source;

pub use error::ParamError;
pub use params::QueryParams;
pub use serialize::{parse_param_pair, parse_query, to_query_string};
pub use source::{CurrentUrl, NoQuery, QuerySource};
