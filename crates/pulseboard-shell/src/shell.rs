//! The layout shell controller.
//!
//! Owns navigation state, settings-panel visibility, and the current
//! path supplied by the external router. The shell never mutates routing
//! state itself; it only reads the path handed to it.

use tracing::debug;

use pulseboard_core::BreadcrumbEntry;
use pulseboard_nav::{NavModel, TitleResolver};

use crate::layout::{LayoutMetrics, LayoutState, ShellConfig};

/// Application frame controller.
#[derive(Debug)]
pub struct LayoutShell {
    config: ShellConfig,
    nav: NavModel,
    titles: TitleResolver,
    settings_open: bool,
    current_path: String,
}

impl LayoutShell {
    pub fn new(titles: TitleResolver, config: ShellConfig) -> Self {
        Self {
            config,
            nav: NavModel::new(),
            titles,
            settings_open: false,
            current_path: "/".to_string(),
        }
    }

    pub fn nav(&self) -> &NavModel {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavModel {
        &mut self.nav
    }

    pub fn titles(&self) -> &TitleResolver {
        &self.titles
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Accept a navigation change from the router.
    ///
    /// Closes the settings overlay: navigating away is one of its exit
    /// paths and must release it.
    pub fn handle_navigation(&mut self, path: &str) {
        if self.current_path != path {
            debug!(from = %self.current_path, to = path, "Navigation");
            self.current_path = path.to_string();
        }
        self.close_settings();
    }

    /// Open the settings overlay. Idempotent.
    pub fn open_settings(&mut self) {
        if !self.settings_open {
            self.settings_open = true;
            debug!("Settings panel opened");
        }
    }

    /// Close the settings overlay. Idempotent.
    pub fn close_settings(&mut self) {
        if self.settings_open {
            self.settings_open = false;
            debug!("Settings panel closed");
        }
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    /// Open the settings overlay for the duration of a scope.
    ///
    /// The returned guard closes the panel when dropped, so every exit
    /// path out of the scope releases the overlay.
    pub fn settings_scope(&mut self) -> SettingsScope<'_> {
        self.open_settings();
        SettingsScope { shell: self }
    }

    /// Flip sidebar collapse. One transition drives both the flag and
    /// the derived metrics.
    pub fn toggle_sidebar(&mut self) {
        self.nav.toggle_collapse();
    }

    /// Current layout flags as a read-only snapshot.
    pub fn layout(&self) -> LayoutState {
        LayoutState {
            sidebar_collapsed: self.nav.is_collapsed(),
            settings_panel_open: self.settings_open,
        }
    }

    /// Reflow metrics derived from the collapse flag in a single read.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::for_collapse(&self.config, self.nav.is_collapsed())
    }

    /// Derive the breadcrumb trail for `current_path`.
    ///
    /// A synthetic Home entry linking to the root always precedes the
    /// trail. Each non-empty segment contributes one entry for its
    /// cumulative path; only the final entry is current. For the root
    /// path the trail is the Home entry alone, marked current.
    pub fn breadcrumb(&self, current_path: &str) -> Vec<BreadcrumbEntry> {
        let segments: Vec<&str> = current_path.split('/').filter(|s| !s.is_empty()).collect();

        let mut trail = Vec::with_capacity(segments.len() + 1);
        trail.push(BreadcrumbEntry {
            path: "/".to_string(),
            title: "Home".to_string(),
            is_current: segments.is_empty(),
        });

        let mut cumulative = String::new();
        for (i, segment) in segments.iter().enumerate() {
            cumulative.push('/');
            cumulative.push_str(segment);
            trail.push(BreadcrumbEntry {
                path: cumulative.clone(),
                title: self.titles.resolve(&cumulative),
                is_current: i + 1 == segments.len(),
            });
        }
        trail
    }

    /// Breadcrumb for the path the router last supplied.
    pub fn current_breadcrumb(&self) -> Vec<BreadcrumbEntry> {
        self.breadcrumb(&self.current_path)
    }
}

impl Drop for LayoutShell {
    fn drop(&mut self) {
        // Unmount is an exit path for the overlay too.
        self.close_settings();
    }
}

/// RAII scope holding the settings overlay open.
///
/// Dropping the guard closes the panel, whichever way the scope exits.
#[derive(Debug)]
pub struct SettingsScope<'a> {
    shell: &'a mut LayoutShell,
}

impl SettingsScope<'_> {
    pub fn shell(&self) -> &LayoutShell {
        self.shell
    }
}

impl Drop for SettingsScope<'_> {
    fn drop(&mut self) {
        self.shell.close_settings();
    }
}
