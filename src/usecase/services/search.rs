use std::time::{Duration, Instant};

use crate::domain::entities::user::User;

/// Narrows the record set by case-insensitive substring match over the
/// searchable fields, keeping the original relative order. An empty term
/// means no filter.
pub fn filter_users(records: &[User], term: &str) -> Vec<User> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|user| {
            user.searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Quiet-period tracker for the search input. Each new input invalidates the
/// previously issued token, so an emission armed for a superseded value can
/// never commit. Time is passed in explicitly.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    last_input: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            last_input: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn note_input(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.last_input = Some(now);
        self.generation
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    #[allow(dead_code)]
    pub fn elapsed(&self, now: Instant) -> bool {
        self.last_input
            .is_some_and(|at| now.duration_since(at) >= self.delay)
    }
}
