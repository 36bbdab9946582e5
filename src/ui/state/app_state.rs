use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::search::Debouncer;
use crate::usecase::services::table::TableController;
use crate::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};

pub struct AppState {
    pub table: Signal<TableController>,
    pub search_input: Signal<String>,
    pub debouncer: Signal<Debouncer>,
    pub pending_search: Signal<Option<Task>>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            table: use_signal(|| {
                TableController::with_pipeline_order(PAGE_SIZE, crate::pipeline_order())
            }),
            search_input: use_signal(String::new),
            debouncer: use_signal(|| Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))),
            pending_search: use_signal(|| None::<Task>),
            status: use_signal(|| "Loading users".to_string()),
        }
    }
}
