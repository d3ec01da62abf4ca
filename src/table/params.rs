use serde::Deserialize;

use super::view::{SortDirection, SortKey, SortSpec, ViewState};

/// View parameters as carried in a page query string or on the command line
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TableParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub per_page: Option<usize>,
    pub page: Option<usize>,
}

/// Rebuild a view from query parameters.
///
/// Unknown sort keys and directions keep the default ordering. The requested
/// page is applied last since every other change resets it to 1.
pub fn view_from_params<K: SortKey>(
    default: ViewState<K>,
    params: &TableParams,
    sortable: bool,
) -> ViewState<K> {
    let mut view = default;

    if let Some(q) = &params.q {
        view = view.with_filter_text(q.clone());
    }

    let requested = params.sort.as_deref().and_then(K::from_name);
    if let (Some(key), true) = (requested, sortable) {
        let dir = params
            .dir
            .as_deref()
            .and_then(SortDirection::parse)
            .unwrap_or(SortDirection::Asc);
        view.sort = Some(SortSpec::new(key, dir));
    }

    if let Some(per_page) = params.per_page {
        view = view.with_page_size(per_page);
    }
    if let Some(page) = params.page {
        view = view.goto_page(page);
    }

    view
}
