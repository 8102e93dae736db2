//! Navigation state and path/title resolution for the pulseboard shell.
//!
//! - `NavModel`: sidebar collapse flag, nested-menu expansion set, and
//!   the active-path rule used for menu highlighting
//! - `TitleResolver`: path to human title mapping with a capitalized
//!   final-segment fallback

pub mod model;
pub mod titles;

pub use model::NavModel;
pub use titles::TitleResolver;
