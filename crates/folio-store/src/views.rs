//! Pure projections used by the derived views
//!
//! None of these reorder their input except where stated: filters keep source
//! order, category lists are sorted case-sensitively.

use std::collections::{BTreeMap, BTreeSet};

use folio_core::{CatalogEntry, Project, Skill};

/// Featured projects in source order
pub fn featured(projects: &[Project]) -> Vec<Project> {
    projects.iter().filter(|p| p.featured).cloned().collect()
}

/// Distinct category labels, sorted
pub fn categories<T: CatalogEntry>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Entries whose category equals `label` exactly, in source order
pub fn in_category<T: CatalogEntry + Clone>(items: &[T], label: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.category() == label)
        .cloned()
        .collect()
}

/// Case-insensitive text search over title, descriptions and technologies.
/// Blank text matches everything.
pub fn search_projects(projects: &[Project], text: &str) -> Vec<Project> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| p.matches(&needle))
        .cloned()
        .collect()
}

/// Skills keyed by category; each group sorted by level descending, then name
pub fn group_by_category(skills: &[Skill]) -> BTreeMap<String, Vec<Skill>> {
    let mut groups: BTreeMap<String, Vec<Skill>> = BTreeMap::new();
    for skill in skills {
        groups
            .entry(skill.category.clone())
            .or_default()
            .push(skill.clone());
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.name.cmp(&b.name)));
    }
    groups
}
