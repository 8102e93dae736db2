//! Layout state and derived reflow metrics.

use serde::{Deserialize, Serialize};

/// Shell layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Sidebar width when expanded, px.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
    /// Sidebar width when collapsed, px.
    #[serde(default = "default_sidebar_collapsed_width")]
    pub sidebar_collapsed_width: u16,
}

fn default_sidebar_width() -> u16 {
    240
}

fn default_sidebar_collapsed_width() -> u16 {
    64
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            sidebar_collapsed_width: default_sidebar_collapsed_width(),
        }
    }
}

/// Interactive layout flags. Exactly one writer (the shell); renderers
/// read snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub sidebar_collapsed: bool,
    pub settings_panel_open: bool,
}

/// Concrete reflow surface consumed by renderers.
///
/// Both fields derive from the same collapse flag in a single read, so a
/// renderer can never observe a sidebar width and content offset that
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub sidebar_width: u16,
    pub content_offset: u16,
}

impl LayoutMetrics {
    /// Compute metrics for the given collapse state.
    pub fn for_collapse(config: &ShellConfig, collapsed: bool) -> Self {
        let sidebar_width = if collapsed {
            config.sidebar_collapsed_width
        } else {
            config.sidebar_width
        };
        Self {
            sidebar_width,
            content_offset: sidebar_width,
        }
    }
}
