use crate::domain::entities::table::{FetchPhase, PipelineOrder, Selection, SortConfig};
use crate::domain::entities::user::{User, UserKey};
use crate::usecase::services::pagination::Paginator;
use crate::usecase::services::search::filter_users;
use crate::usecase::services::sorting::Sorter;

/// One page of the derived view plus the numbers the chrome renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<User>,
    pub filtered_total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub showing_from: usize,
    pub showing_to: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Owns the interacting view state: the debounced search term, page index,
/// sort config, row selection, and the fetch phase. The record set itself
/// stays with the fetch layer and is passed into the derivations read-only.
#[derive(Debug, Clone)]
pub struct TableController {
    search_term: String,
    paginator: Paginator,
    sorter: Sorter,
    selection: Selection,
    phase: FetchPhase,
    order: PipelineOrder,
}

impl TableController {
    pub fn new(page_size: usize) -> Self {
        Self::with_pipeline_order(page_size, PipelineOrder::default())
    }

    pub fn with_pipeline_order(page_size: usize, order: PipelineOrder) -> Self {
        Self {
            search_term: String::new(),
            paginator: Paginator::new(page_size),
            sorter: Sorter::default(),
            selection: Selection::default(),
            phase: FetchPhase::default(),
            order,
        }
    }

    #[allow(dead_code)]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_config(&self) -> Option<SortConfig> {
        self.sorter.config()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    #[allow(dead_code)]
    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn mark_loading(&mut self) {
        self.phase = FetchPhase::Loading;
    }

    pub fn mark_ready(&mut self) {
        self.phase = FetchPhase::Ready;
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.phase = FetchPhase::Failed(message.into());
    }

    /// A changed term and a stale page index must never meet a render: the
    /// term swap and the page reset are one transition.
    pub fn apply_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.paginator.reset();
    }

    pub fn handle_sort(&mut self, key: UserKey) {
        self.sorter.handle_sort(key);
    }

    pub fn next_page(&mut self, records: &[User]) {
        let filtered_count = filter_users(records, &self.search_term).len();
        let total_pages = self.paginator.total_pages(filtered_count);
        self.paginator.next_page(total_pages);
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    pub fn select(&mut self, user: User) {
        self.selection.select(user);
    }

    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    /// Filter, then slice, then sort the slice. Page counts and the
    /// showing-range always reflect the filtered totals, and with the
    /// default order the sort stays local to the visible page.
    pub fn page_view(&self, records: &[User]) -> PageView {
        let filtered = filter_users(records, &self.search_term);
        let filtered_total = filtered.len();
        let total_pages = self.paginator.total_pages(filtered_total);
        let current_page = self.paginator.current_page();

        let rows = match self.order {
            PipelineOrder::SortAfterPaginate => self.sorter.sort(self.paginator.slice(&filtered)),
            PipelineOrder::SortBeforePaginate => {
                let sorted = self.sorter.sort(&filtered);
                self.paginator.slice(&sorted).to_vec()
            }
        };

        let page_size = self.paginator.page_size();
        let showing_from = if rows.is_empty() {
            0
        } else {
            (current_page - 1) * page_size + 1
        };
        let showing_to = (current_page * page_size).min(filtered_total);

        PageView {
            rows,
            filtered_total,
            current_page,
            total_pages,
            showing_from,
            showing_to,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}
