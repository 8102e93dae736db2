//! Navigation model: collapse flag, expansion set, active-path rule.
//!
//! All mutation goes through the two toggle operations; everything else
//! is a pure query. Toggling a path that does not exist in the menu tree
//! is harmless set membership either way.

use std::collections::HashSet;
use tracing::debug;

/// Interactive navigation state.
///
/// Created at shell mount, mutated by user interaction, discarded at
/// unmount. Single writer; renderers only query.
#[derive(Debug, Clone, Default)]
pub struct NavModel {
    collapsed: bool,
    expanded: HashSet<String>,
}

impl NavModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the sidebar collapse flag. Two calls restore the original value.
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
        debug!(collapsed = self.collapsed, "Sidebar collapse toggled");
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip expansion membership of `path`. Two calls restore the
    /// original membership.
    pub fn toggle_expand(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
        debug!(path, expanded = self.expanded.contains(path), "Menu expansion toggled");
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Whether the menu entry at `item_path` is active for `current_path`.
    ///
    /// True on exact match, or when `current_path` continues past
    /// `item_path` at a segment boundary ("/dashboard/charts" is active
    /// for "/dashboard/charts/bar" but not for "/dashboard/chartsX").
    /// The "/home" entry is additionally active at the root path "/";
    /// no other entry gets that treatment.
    pub fn is_active(item_path: &str, current_path: &str) -> bool {
        if current_path == item_path {
            return true;
        }
        if item_path == "/home" && current_path == "/" {
            return true;
        }
        current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_collapse_pairs_restore() {
        let mut model = NavModel::new();
        assert!(!model.is_collapsed());
        model.toggle_collapse();
        assert!(model.is_collapsed());
        model.toggle_collapse();
        assert!(!model.is_collapsed());
    }

    #[test]
    fn test_toggle_expand_pairs_restore() {
        let mut model = NavModel::new();
        // 2n toggles leave membership exactly where it started.
        for _ in 0..3 {
            model.toggle_expand("/dashboard");
            assert!(model.is_expanded("/dashboard"));
            model.toggle_expand("/dashboard");
            assert!(!model.is_expanded("/dashboard"));
        }
    }

    #[test]
    fn test_toggle_unknown_path_is_harmless() {
        let mut model = NavModel::new();
        model.toggle_expand("/not/in/any/tree");
        assert!(model.is_expanded("/not/in/any/tree"));
        assert!(!model.is_expanded("/dashboard"));
    }

    #[test]
    fn test_is_active_exact_match() {
        assert!(NavModel::is_active("/home", "/home"));
        assert!(NavModel::is_active("/dashboard/charts", "/dashboard/charts"));
    }

    #[test]
    fn test_is_active_home_matches_root() {
        assert!(NavModel::is_active("/home", "/"));
        // The special case is /home only.
        assert!(!NavModel::is_active("/library", "/"));
    }

    #[test]
    fn test_is_active_segment_boundary() {
        assert!(NavModel::is_active(
            "/dashboard/charts",
            "/dashboard/charts/bar"
        ));
        assert!(!NavModel::is_active(
            "/dashboard/charts",
            "/dashboard/chartsX"
        ));
        assert!(!NavModel::is_active("/charts", "/chartsExtra"));
    }

    #[test]
    fn test_is_active_root_item_only_matches_root() {
        assert!(NavModel::is_active("/", "/"));
        assert!(!NavModel::is_active("/", "/dashboard"));
    }
}
