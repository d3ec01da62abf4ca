use super::compare::{SortValue, compare_values};
use super::view::{SortKey, SortSpec, ViewState};

/// A row that can live in a filterable, sortable table
pub trait TableRow {
    type Key: SortKey;

    /// Text searched by the filter box
    fn haystack(&self) -> String;

    fn sort_value(&self, key: Self::Key) -> SortValue;
}

/// The slice of rows currently on screen plus what the pager needs
#[derive(Debug)]
pub struct VisiblePage<'a, R> {
    pub rows: Vec<&'a R>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    /// Index of the first visible row within the filtered set
    pub offset: usize,
}

impl<R> VisiblePage<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Filter, sort and slice `rows` according to `view`
pub fn compute_visible_page<'a, R: TableRow>(rows: &'a [R], view: &ViewState<R::Key>) -> VisiblePage<'a, R> {
    let mut filtered = filter_rows(rows, &view.filter_text);

    if let Some(sort) = view.sort {
        sort_rows(&mut filtered, sort);
    }

    paginate(filtered, view.page_size, view.current_page)
}

pub fn filter_rows<'a, R: TableRow>(rows: &'a [R], filter_text: &str) -> Vec<&'a R> {
    let needle = filter_text.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|row| row.haystack().to_lowercase().contains(&needle))
        .collect()
}

fn sort_rows<R: TableRow>(rows: &mut [&R], sort: SortSpec<R::Key>) {
    // sort_by is stable, equal rows keep their fetched order
    rows.sort_by(|a, b| {
        let ordering = compare_values(&a.sort_value(sort.key), &b.sort_value(sort.key));
        sort.dir.apply(ordering)
    });
}

pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, filtered_count: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(filtered_count, page_size))
}

fn paginate<R>(filtered: Vec<&R>, page_size: usize, requested_page: usize) -> VisiblePage<'_, R> {
    let page_size = page_size.max(1);
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, page_size);
    let current_page = clamp_page(requested_page, filtered_count, page_size);
    let offset = (current_page - 1) * page_size;

    let rows = filtered.into_iter().skip(offset).take(page_size).collect();

    VisiblePage {
        rows,
        current_page,
        total_pages,
        filtered_count,
        offset,
    }
}
