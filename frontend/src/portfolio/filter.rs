//! Portfolio filtering.
//!
//! A project is visible when it passes both dimensions: its category is
//! selected (or no category is), and it carries at least one selected tag
//! (or no tag is). Option counts are computed against the *other*
//! dimension only, so a category's count never depends on which categories
//! are ticked.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::data::Project;
use crate::storage::{self, KeyValueStore, FILTER_CATEGORIES_KEY, FILTER_TAGS_KEY};

/// Pseudo-category that clears the category selection.
pub const ALL_CATEGORIES: &str = "All Categories";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl FilterSelection {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            categories: storage::load_set(store, FILTER_CATEGORIES_KEY),
            tags: storage::load_set(store, FILTER_TAGS_KEY),
        }
    }

    /// Writes both slots. A failure on one slot does not skip the other.
    pub fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(e) = storage::save_set(store, FILTER_CATEGORIES_KEY, &self.categories) {
            warn!("Failed to persist category filter: {}", e);
        }
        if let Err(e) = storage::save_set(store, FILTER_TAGS_KEY, &self.tags) {
            warn!("Failed to persist tag filter: {}", e);
        }
    }

    pub fn toggle_category(&mut self, category: &str) {
        if category == ALL_CATEGORIES {
            self.categories.clear();
        } else if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
        debug!("Category selection now {:?}", self.categories);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
        debug!("Tag selection now {:?}", self.tags);
    }

    pub fn reset(&mut self) {
        self.categories.clear();
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty()
    }

    pub fn is_category_active(&self, category: &str) -> bool {
        if category == ALL_CATEGORIES {
            self.categories.is_empty()
        } else {
            self.categories.contains(category)
        }
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    fn category_matches(&self, project: &Project) -> bool {
        self.categories.is_empty() || self.categories.contains(project.category)
    }

    fn tags_match(&self, project: &Project) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|t| project.has_tag(t))
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.category_matches(project) && self.tags_match(project)
    }

    /// Visible projects in catalog order, truncated to `limit` after filtering.
    pub fn apply<'a>(&self, catalog: &'a [Project], limit: Option<usize>) -> Vec<&'a Project> {
        catalog
            .iter()
            .filter(|p| self.matches(p))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// Projects in `category` that pass the tag selection. The sentinel
    /// counts every project passing the tag selection.
    pub fn category_count(&self, catalog: &[Project], category: &str) -> usize {
        catalog
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .filter(|p| self.tags_match(p))
            .count()
    }

    /// Projects tagged `tag` that pass the category selection.
    pub fn tag_count(&self, catalog: &[Project], tag: &str) -> usize {
        catalog
            .iter()
            .filter(|p| p.has_tag(tag))
            .filter(|p| self.category_matches(p))
            .count()
    }

    pub fn category_counts(&self, catalog: &[Project]) -> Vec<(&'static str, usize)> {
        category_options(catalog)
            .into_iter()
            .map(|c| (c, self.category_count(catalog, c)))
            .collect()
    }

    pub fn tag_counts(&self, catalog: &[Project]) -> Vec<(&'static str, usize)> {
        all_tags(catalog)
            .into_iter()
            .map(|t| (t, self.tag_count(catalog, t)))
            .collect()
    }
}

/// Sentinel first, then each category in order of first appearance.
pub fn category_options(catalog: &[Project]) -> Vec<&'static str> {
    let mut options = vec![ALL_CATEGORIES];
    for project in catalog {
        if !options.contains(&project.category) {
            options.push(project.category);
        }
    }
    options
}

pub fn all_tags(catalog: &[Project]) -> Vec<&'static str> {
    catalog
        .iter()
        .flat_map(|p| p.technologies.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn project(id: &'static str, category: &'static str, technologies: &'static [&'static str]) -> Project {
        Project {
            id,
            title: id,
            category,
            technologies,
            description: "",
            full_description: None,
            image_url: "",
            demo_video_url: None,
            captions_url: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("A", "Web", &["React", "AWS"]),
            project("B", "Mobile", &["React"]),
            project("C", "Web", &["AWS"]),
        ]
    }

    fn ids(projects: Vec<&Project>) -> Vec<&'static str> {
        projects.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_selection_shows_everything() {
        let catalog = sample();
        let selection = FilterSelection::default();
        assert_eq!(ids(selection.apply(&catalog, None)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_category_then_tag_then_clear_category() {
        let catalog = sample();
        let mut selection = FilterSelection::default();

        selection.toggle_category("Web");
        assert_eq!(ids(selection.apply(&catalog, None)), vec!["A", "C"]);

        selection.toggle_tag("React");
        assert_eq!(ids(selection.apply(&catalog, None)), vec!["A"]);

        selection.toggle_category(ALL_CATEGORIES);
        assert_eq!(ids(selection.apply(&catalog, None)), vec!["A", "B"]);
    }

    #[test]
    fn test_tags_are_or_within_dimension() {
        let catalog = sample();
        let mut selection = FilterSelection::default();
        selection.toggle_tag("AWS");
        selection.toggle_tag("React");
        assert_eq!(ids(selection.apply(&catalog, None)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_matches_equals_and_of_dimensions_for_every_combination() {
        let catalog = sample();
        let categories = ["Web", "Mobile", "Desktop"];
        let tags = ["React", "AWS", "Rust"];

        for cat_mask in 0..(1u32 << categories.len()) {
            for tag_mask in 0..(1u32 << tags.len()) {
                let mut selection = FilterSelection::default();
                for (i, c) in categories.iter().enumerate() {
                    if cat_mask & (1 << i) != 0 {
                        selection.toggle_category(c);
                    }
                }
                for (i, t) in tags.iter().enumerate() {
                    if tag_mask & (1 << i) != 0 {
                        selection.toggle_tag(t);
                    }
                }

                for p in &catalog {
                    let by_category = selection.categories.is_empty()
                        || selection.categories.contains(p.category);
                    let by_tag = selection.tags.is_empty()
                        || p.technologies.iter().any(|t| selection.tags.contains(*t));
                    assert_eq!(selection.matches(p), by_category && by_tag);
                }
            }
        }
    }

    #[test]
    fn test_unknown_values_match_nothing() {
        let catalog = sample();
        let mut selection = FilterSelection::default();
        selection.toggle_tag("COBOL");
        assert!(selection.apply(&catalog, None).is_empty());

        selection.reset();
        selection.toggle_category("Aerospace");
        assert!(selection.apply(&catalog, None).is_empty());
    }

    #[test]
    fn test_sentinel_clears_and_is_idempotent() {
        let mut selection = FilterSelection::default();
        selection.toggle_category("Web");
        selection.toggle_category("Mobile");

        selection.toggle_category(ALL_CATEGORIES);
        let once = selection.clone();
        selection.toggle_category(ALL_CATEGORIES);

        assert!(once.categories.is_empty());
        assert_eq!(selection, once);
        assert!(selection.is_category_active(ALL_CATEGORIES));
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut selection = FilterSelection::default();
        selection.toggle_category("Web");
        selection.toggle_category("Web");
        selection.toggle_tag("AWS");
        selection.toggle_tag("AWS");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_category_counts_ignore_category_selection() {
        let catalog = sample();
        let mut selection = FilterSelection::default();
        selection.toggle_tag("React");
        let before = selection.category_counts(&catalog);

        selection.toggle_category("Mobile");
        let after = selection.category_counts(&catalog);

        assert_eq!(before, after);
        assert_eq!(after, vec![(ALL_CATEGORIES, 2), ("Web", 1), ("Mobile", 1)]);
    }

    #[test]
    fn test_tag_counts_ignore_tag_selection() {
        let catalog = sample();
        let mut selection = FilterSelection::default();
        selection.toggle_category("Web");
        let before = selection.tag_counts(&catalog);

        selection.toggle_tag("React");
        let after = selection.tag_counts(&catalog);

        assert_eq!(before, after);
        assert_eq!(after, vec![("AWS", 2), ("React", 1)]);
    }

    #[test]
    fn test_zero_results_then_reset_restores_catalog() {
        let catalog = sample();
        let mut selection = FilterSelection::default();
        selection.toggle_category("Mobile");
        selection.toggle_tag("AWS");
        assert!(selection.apply(&catalog, None).is_empty());

        selection.reset();
        assert!(selection.is_empty());
        assert_eq!(selection.apply(&catalog, None).len(), catalog.len());
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        let catalog = sample();
        let mut selection = FilterSelection::default();
        selection.toggle_tag("AWS");
        assert_eq!(ids(selection.apply(&catalog, Some(1))), vec!["A"]);
        assert_eq!(ids(selection.apply(&catalog, Some(10))), vec!["A", "C"]);
    }

    #[test]
    fn test_options_order() {
        let catalog = sample();
        assert_eq!(category_options(&catalog), vec![ALL_CATEGORIES, "Web", "Mobile"]);
        assert_eq!(all_tags(&catalog), vec!["AWS", "React"]);
    }

    #[test]
    fn test_selection_survives_reload() {
        let store = MemoryStore::default();
        let mut selection = FilterSelection::default();
        selection.toggle_category("Web");
        selection.toggle_tag("React");
        selection.toggle_tag("AWS");
        selection.persist(&store);

        assert_eq!(FilterSelection::load(&store), selection);

        selection.reset();
        selection.persist(&store);
        assert!(FilterSelection::load(&store).is_empty());
    }

    #[test]
    fn test_bundled_catalog_is_consistent() {
        let catalog = crate::data::catalog();
        let selection = FilterSelection::default();
        for (category, count) in selection.category_counts(catalog).into_iter().skip(1) {
            assert!(count > 0, "{} has no projects", category);
        }
        for p in catalog {
            assert!(p.captions_url.is_none() || p.demo_video_url.is_some(), "{}", p.id);
        }
    }
}
