use super::page::{TableRow, VisiblePage, clamp_page, compute_visible_page, filter_rows};
use super::view::ViewState;

/// Full fetched row set together with the current view of it
#[derive(Debug, Clone)]
pub struct TableState<R: TableRow> {
    rows: Vec<R>,
    view: ViewState<R::Key>,
    sortable: bool,
}

impl<R: TableRow> TableState<R> {
    pub fn new(rows: Vec<R>, view: ViewState<R::Key>, sortable: bool) -> Self {
        Self { rows, view, sortable }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn view(&self) -> &ViewState<R::Key> {
        &self.view
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Swap in a freshly fetched row set, keeping the view parameters
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn goto_page(&mut self, page: usize) {
        let filtered_count = filter_rows(&self.rows, &self.view.filter_text).len();
        let page = clamp_page(page, filtered_count, self.view.page_size);
        self.view = self.view.clone().goto_page(page);
    }

    pub fn visible_page(&self) -> VisiblePage<'_, R> {
        compute_visible_page(&self.rows, &self.view)
    }
}
