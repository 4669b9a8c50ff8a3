//! Framework-free helpers shared by the panel and its hosts.

pub mod format;
pub mod platform;
pub mod selection;
pub mod timing;
