//! Where the factory reads the current URL's query parameters from.

use std::cell::RefCell;
use std::rc::Rc;

use super::{parse_query, QueryParams};

/// Supplies the query parameters of the page the user is currently on.
///
/// Implementations return an empty map when nothing is available.
pub trait QuerySource {
    fn query_params(&self) -> QueryParams;
}

/// No current URL; nothing is ever persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuery;

impl QuerySource for NoQuery {
    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// A fixed parameter map.
impl QuerySource for QueryParams {
    fn query_params(&self) -> QueryParams {
        self.clone()
    }
}

impl<F> QuerySource for F
where
    F: Fn() -> QueryParams,
{
    fn query_params(&self) -> QueryParams {
        self()
    }
}

/// Shared handle to the current location.
///
/// Clones share the same slot: hand one clone to the factory and keep another
/// to [`CurrentUrl::set`] after each navigation.
#[derive(Debug, Clone, Default)]
pub struct CurrentUrl {
    url: Rc<RefCell<Option<String>>>,
}

impl CurrentUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Rc::new(RefCell::new(Some(url.into()))),
        }
    }

    pub fn set(&self, url: impl Into<String>) {
        *self.url.borrow_mut() = Some(url.into());
    }

    pub fn clear(&self) {
        *self.url.borrow_mut() = None;
    }

    pub fn get(&self) -> Option<String> {
        self.url.borrow().clone()
    }
}

impl QuerySource for CurrentUrl {
    fn query_params(&self) -> QueryParams {
        self.url
            .borrow()
            .as_deref()
            .map(parse_query)
            .unwrap_or_default()
    }
}
