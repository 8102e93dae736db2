//! Path to human-title resolution.

use std::collections::HashMap;
use tracing::trace;

use pulseboard_core::NavTree;

/// Static path-to-title table with a derived fallback.
///
/// Lookup never fails: on a miss the final path segment is returned with
/// its first character uppercased.
#[derive(Debug, Clone, Default)]
pub struct TitleResolver {
    titles: HashMap<String, String>,
}

impl TitleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a navigation tree's titles.
    pub fn from_tree(tree: &NavTree) -> Self {
        Self {
            titles: tree.title_pairs().into_iter().collect(),
        }
    }

    /// Build the table from explicit `(path, title)` pairs.
    pub fn from_pairs<I, P, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: Into<String>,
    {
        Self {
            titles: pairs
                .into_iter()
                .map(|(p, t)| (p.into(), t.into()))
                .collect(),
        }
    }

    /// Add or replace a single mapping.
    pub fn insert(&mut self, path: impl Into<String>, title: impl Into<String>) {
        self.titles.insert(path.into(), title.into());
    }

    /// Resolve a path to a display title. Total; never errors.
    pub fn resolve(&self, path: &str) -> String {
        if let Some(title) = self.titles.get(path) {
            return title.clone();
        }
        trace!(path, "Title lookup miss, using segment fallback");
        match path.rsplit('/').find(|s| !s.is_empty()) {
            Some(segment) => capitalize_first(segment),
            // Root or empty path with no table entry.
            None => "Home".to_string(),
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
