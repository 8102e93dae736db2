//! Core domain types for the pulseboard dashboard shell.
//!
//! This crate provides fundamental types used throughout the shell:
//! - `NavItem` / `NavTree`: the static navigation menu definition
//! - `NavIcon`: tagged renderer kind for menu entries
//! - `BreadcrumbEntry`: one link of a derived breadcrumb trail
//! - `Sample`, `MetricRange`, `RollingWindow`: feed data types

pub mod error;
pub mod nav;
pub mod sample;

pub use error::{CoreError, Result};
pub use nav::{BreadcrumbEntry, NavIcon, NavItem, NavTree};
pub use sample::{MetricMap, MetricRange, RollingWindow, Sample};
