pub mod compare;
pub mod page;
pub mod params;
pub mod rows;
pub mod state;
pub mod view;

pub use compare::{SortValue, compare_values};
pub use page::{TableRow, VisiblePage, compute_visible_page};
pub use params::{TableParams, view_from_params};
pub use rows::{MatchKey, StandingsKey, default_matches_view, default_standings_view};
pub use state::TableState;
pub use view::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES, SortDirection, SortKey, SortSpec, ViewState};
