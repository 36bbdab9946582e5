use crate::domain::entities::table::{SortConfig, SortDirection};
use crate::domain::entities::user::{User, UserKey};

#[derive(Debug, Clone, Default)]
pub struct Sorter {
    config: Option<SortConfig>,
}

impl Sorter {
    pub fn config(&self) -> Option<SortConfig> {
        self.config
    }

    /// First click on a key sorts ascending, the second flips to descending,
    /// and further clicks keep alternating. A key never reverts to unsorted.
    pub fn handle_sort(&mut self, key: UserKey) {
        let direction = match self.config {
            Some(SortConfig {
                key: active,
                direction: SortDirection::Ascending,
            }) if active == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.config = Some(SortConfig { key, direction });
    }

    /// Stable ordering of a fresh copy; records with equal keys keep their
    /// incoming relative order. Identity when no config is set.
    pub fn sort(&self, data: &[User]) -> Vec<User> {
        let mut ordered = data.to_vec();
        if let Some(SortConfig { key, direction }) = self.config {
            ordered.sort_by(|a, b| {
                let ordering = key.field_of(a).cmp(key.field_of(b));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        ordered
    }
}
