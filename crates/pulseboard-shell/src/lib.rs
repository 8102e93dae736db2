//! Application frame controller for pulseboard.
//!
//! Composes header/sidebar/content/footer state: owns settings-panel
//! visibility, derives the breadcrumb trail for the current path, and
//! exposes layout metrics that reflow atomically with sidebar collapse.

pub mod layout;
pub mod shell;

pub use layout::{LayoutMetrics, LayoutState, ShellConfig};
pub use shell::{LayoutShell, SettingsScope};
