use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const PAGE_SIZE_CHOICES: [usize; 4] = [10, 25, 50, 100];

/// Column identifier of a table, addressable by name from query strings and CLI flags
pub trait SortKey: Copy + Eq + std::fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn all() -> &'static [Self];

    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<K> {
    pub key: K,
    pub dir: SortDirection,
}

impl<K> SortSpec<K> {
    pub fn new(key: K, dir: SortDirection) -> Self {
        Self { key, dir }
    }
}

/// View parameters of a table. Every interaction produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<K> {
    pub filter_text: String,
    pub sort: Option<SortSpec<K>>,
    pub page_size: usize,
    pub current_page: usize,
}

impl<K: SortKey> ViewState<K> {
    pub fn new(sort: Option<SortSpec<K>>, page_size: usize) -> Self {
        Self {
            filter_text: String::new(),
            sort,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn with_filter_text(self, text: impl Into<String>) -> Self {
        Self {
            filter_text: text.into(),
            current_page: 1,
            ..self
        }
    }

    /// Same column flips direction, a new column starts ascending
    pub fn toggle_sort(self, key: K) -> Self {
        let sort = match self.sort {
            Some(current) if current.key == key => SortSpec::new(key, current.dir.flipped()),
            _ => SortSpec::new(key, SortDirection::Asc),
        };
        Self {
            sort: Some(sort),
            current_page: 1,
            ..self
        }
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            ..self
        }
    }

    /// Upper bound is applied against the rows, see `compute_visible_page`
    pub fn goto_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    pub fn sort_direction_for(&self, key: K) -> Option<SortDirection> {
        self.sort.filter(|sort| sort.key == key).map(|sort| sort.dir)
    }
}
