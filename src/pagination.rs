use serde::Serialize;

use crate::domain::filter::RentalFilter;

/// Requested page window plus the size of the whole filtered set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator {
    /// Requested page size, `0` when the filter carried no limit.
    pub limit: u32,
    pub offset: u32,
    pub total_items: usize,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub paginator: Paginator,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wraps the rows of one page.
    ///
    /// `total` must come from the selection-only count so it does not depend
    /// on the requested window.
    pub fn new<R, F>(filter: &RentalFilter, total: usize, rows: Vec<R>, mapper: F) -> Self
    where
        F: FnMut(R) -> T,
    {
        Self {
            paginator: Paginator {
                limit: filter.limit().unwrap_or_default(),
                offset: filter.offset().unwrap_or_default(),
                total_items: total,
            },
            items: rows.into_iter().map(mapper).collect(),
        }
    }
}
