//! Shared UI crate for Checkpad: the results panel, the playground host view
//! and localization. Platform crates (web, desktop) only launch and route.

pub mod core;
pub mod i18n;
pub mod playground;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
