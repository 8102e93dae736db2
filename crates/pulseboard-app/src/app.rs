//! Application wiring and run loop.

use tracing::{debug, info};

use pulseboard_core::{BreadcrumbEntry, MetricRange, NavIcon, NavItem, NavTree};
use pulseboard_feed::{FeedConfig, FeedSimulator};
use pulseboard_nav::TitleResolver;
use pulseboard_shell::LayoutShell;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Scripted router stand-in: the paths "visited" at startup.
const NAV_SCRIPT: &[&str] = &[
    "/",
    "/dashboard",
    "/dashboard/charts/bar",
    "/dashboard/stats",
];

/// Demo application around the shell core.
pub struct Application {
    config: AppConfig,
    tree: NavTree,
    shell: LayoutShell,
    feed: FeedSimulator,
}

impl Application {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let tree = default_nav_tree()?;
        let titles = TitleResolver::from_tree(&tree);
        let shell = LayoutShell::new(titles, config.shell.clone());
        Ok(Self {
            config,
            tree,
            shell,
            feed: FeedSimulator::new(),
        })
    }

    pub fn nav_tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn shell(&self) -> &LayoutShell {
        &self.shell
    }

    /// Start the feed, replay the navigation script, then log snapshots
    /// until ctrl-c. The feed is stopped before returning on every path.
    pub async fn run(&mut self) -> AppResult<()> {
        let feed_config = effective_feed_config(&self.config);
        self.feed.start(feed_config)?;
        let mut rx = self.feed.subscribe();

        self.demo_interactions();

        info!("Entering snapshot loop (ctrl-c to exit)");
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = rx.borrow_and_update().clone();
                    info!(
                        tick = snapshot.tick,
                        window_len = snapshot.window.len(),
                        stats = %serde_json::to_string(&snapshot.stats)?,
                        "Feed snapshot"
                    );
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        self.feed.stop().await;
        Ok(())
    }

    /// Exercise the shell the way an interactive session would.
    fn demo_interactions(&mut self) {
        self.shell.nav_mut().toggle_expand("/dashboard");
        debug!(
            expanded = self.shell.nav().is_expanded("/dashboard"),
            "Dashboard menu expanded"
        );

        for path in NAV_SCRIPT {
            self.navigate(path);
        }

        self.shell.toggle_sidebar();
        let metrics = self.shell.metrics();
        info!(
            sidebar_width = metrics.sidebar_width,
            content_offset = metrics.content_offset,
            "Sidebar collapsed"
        );
        self.shell.toggle_sidebar();

        // Settings overlay held open for a scope, released on exit.
        {
            let scope = self.shell.settings_scope();
            debug!(open = scope.shell().is_settings_open(), "Settings panel scope");
        }
        debug!(open = self.shell.is_settings_open(), "Settings panel after scope");
    }

    fn navigate(&mut self, path: &str) {
        self.shell.handle_navigation(path);
        let trail = self.shell.current_breadcrumb();
        info!(path, trail = %format_trail(&trail), "Route changed");
    }
}

/// The menu of the stock dashboard.
pub fn default_nav_tree() -> AppResult<NavTree> {
    let tree = NavTree::new(vec![
        NavItem::leaf("Home", "/home", NavIcon::Home),
        NavItem::group(
            "Dashboard",
            "/dashboard",
            NavIcon::Dashboard,
            vec![
                NavItem::group(
                    "Charts",
                    "/dashboard/charts",
                    NavIcon::Chart,
                    vec![
                        NavItem::leaf("Bar Charts", "/dashboard/charts/bar", NavIcon::Chart),
                        NavItem::leaf("Line Charts", "/dashboard/charts/line", NavIcon::Chart),
                    ],
                ),
                NavItem::leaf("Stats", "/dashboard/stats", NavIcon::Stats),
            ],
        ),
        NavItem::leaf("Library", "/library", NavIcon::Library),
        NavItem::leaf("Community", "/community", NavIcon::Community),
        NavItem::leaf("Settings", "/settings", NavIcon::Settings),
    ])?;
    Ok(tree)
}

/// Feed settings actually used at start.
///
/// When the file configures no metrics at all, fall back to the stock
/// demo feed so the snapshot loop has something to show.
fn effective_feed_config(config: &AppConfig) -> FeedConfig {
    let mut feed = config.feed.clone();
    if feed.ranges.is_empty() && feed.aux_ranges.is_empty() {
        feed.ranges
            .insert("users".to_string(), MetricRange::new(40.0, 70.0));
        feed.ranges
            .insert("sales".to_string(), MetricRange::new(1000.0, 5000.0));
        feed.aux_ranges
            .insert("load".to_string(), MetricRange::new(0.0, 100.0));
    }
    feed
}

fn format_trail(trail: &[BreadcrumbEntry]) -> String {
    trail
        .iter()
        .map(|e| {
            if e.is_current {
                format!("[{}]", e.title)
            } else {
                e.title.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}
