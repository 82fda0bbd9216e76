//! Synthetic change generation
//!
//! Picks a random category from the configured set and renders the matching
//! template for the day of the target timestamp.

use crate::artifacts::category::template::MAX_BULLETS;
use crate::artifacts::category::{Category, CategorySet};
use chrono::NaiveDateTime;
use derive_new::new;
use fake::rand;
use fake::rand::Rng;
use std::path::PathBuf;

pub const COMMIT_MESSAGE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One generated edit: which category it belongs to, where it goes and what
/// it contains.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct GeneratedChange {
    pub category: Category,
    pub file_path: PathBuf,
    pub content: String,
}

impl GeneratedChange {
    pub fn commit_message(&self, timestamp: NaiveDateTime) -> String {
        format!(
            "{} - {}",
            self.category,
            timestamp.format(COMMIT_MESSAGE_TIME_FORMAT)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentGenerator {
    categories: CategorySet,
    bullet_count: usize,
}

impl ContentGenerator {
    pub fn new(categories: CategorySet, bullet_count: usize) -> Self {
        ContentGenerator {
            categories,
            bullet_count: bullet_count.min(MAX_BULLETS),
        }
    }

    pub fn categories(&self) -> CategorySet {
        self.categories
    }

    pub fn generate(&self, timestamp: NaiveDateTime) -> GeneratedChange {
        self.generate_with(&mut rand::rng(), timestamp)
    }

    pub fn generate_with<R: Rng>(
        &self,
        rng: &mut R,
        timestamp: NaiveDateTime,
    ) -> GeneratedChange {
        let categories = self.categories.categories();
        let category = categories[rng.random_range(0..categories.len())];

        self.render(category, timestamp)
    }

    pub fn render(&self, category: Category, timestamp: NaiveDateTime) -> GeneratedChange {
        let date = timestamp.date();
        let template = category.template();

        GeneratedChange::new(
            category,
            template.file_path(date),
            template.render(date, self.bullet_count),
        )
    }
}
