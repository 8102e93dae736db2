//! Navigation menu definition types.
//!
//! The menu is a static tree of `NavItem`s, built once at configuration
//! time and never mutated afterwards. Renderers dispatch on `NavIcon`
//! through a lookup table rather than per-item callables.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{CoreError, Result};

/// Renderer kind for a menu entry's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Home,
    Dashboard,
    Chart,
    Stats,
    Library,
    Community,
    Settings,
    /// No icon rendered for this entry.
    #[default]
    None,
}

impl NavIcon {
    /// Glyph used by text renderers. Lookup table, one entry per variant.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Dashboard => "▦",
            Self::Chart => "▂▅▇",
            Self::Stats => "Σ",
            Self::Library => "▤",
            Self::Community => "◉",
            Self::Settings => "⚙",
            Self::None => " ",
        }
    }
}

impl fmt::Display for NavIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One entry of the navigation menu.
///
/// Immutable after tree construction. A parent's path being a prefix of
/// its children's paths is convention only and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title (also feeds the breadcrumb title table).
    pub title: String,
    /// Route path (e.g., "/dashboard/charts/bar").
    pub path: String,
    /// Icon renderer kind.
    #[serde(default)]
    pub icon: NavIcon,
    /// Nested entries, ordered.
    #[serde(default)]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Create a leaf entry with no children.
    pub fn leaf(title: impl Into<String>, path: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            icon,
            children: Vec::new(),
        }
    }

    /// Create a group entry with nested children.
    pub fn group(
        title: impl Into<String>,
        path: impl Into<String>,
        icon: NavIcon,
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            icon,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The full navigation menu.
///
/// Construction validates the sibling-uniqueness invariant: no two
/// entries sharing a parent may carry the same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavTree {
    items: Vec<NavItem>,
}

impl NavTree {
    /// Build a tree from top-level entries.
    ///
    /// Fails with `CoreError::DuplicateNavPath` if any sibling group
    /// contains two entries with the same path.
    pub fn new(items: Vec<NavItem>) -> Result<Self> {
        check_sibling_paths(&items)?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Check whether any entry in the tree carries `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        fn walk(items: &[NavItem], path: &str) -> bool {
            items
                .iter()
                .any(|i| i.path == path || walk(&i.children, path))
        }
        walk(&self.items, path)
    }

    /// Flatten the tree into `(path, title)` pairs, depth-first.
    ///
    /// Feeds the title table so menu titles and breadcrumb titles cannot
    /// drift apart.
    pub fn title_pairs(&self) -> Vec<(String, String)> {
        fn walk(items: &[NavItem], out: &mut Vec<(String, String)>) {
            for item in items {
                out.push((item.path.clone(), item.title.clone()));
                walk(&item.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }
}

fn check_sibling_paths(items: &[NavItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.path.as_str()) {
            return Err(CoreError::DuplicateNavPath(item.path.clone()));
        }
        check_sibling_paths(&item.children)?;
    }
    Ok(())
}

/// One link of a derived breadcrumb trail.
///
/// Derived on demand from the current path; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub path: String,
    pub title: String,
    /// The final entry is the current location and renders as plain text,
    /// not a link.
    pub is_current: bool,
}
