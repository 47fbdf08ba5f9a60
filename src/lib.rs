//! Text Compare
//!
//! A line-by-line text comparison workbench. The diff engine lives in
//! [`compare`] and has no UI dependencies; the rest of the crate is the
//! native application around it.

pub mod app;
pub mod backend;
pub mod compare;
pub mod config;
pub mod constant;
pub mod export;
pub mod messages;
pub mod style;
pub mod ui;
pub mod workbench;
