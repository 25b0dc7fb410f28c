//! Shared UI crate for the backtest report page: upload controller, metric
//! rendering, browser glue and views.

pub mod core;
pub mod i18n;
pub mod report;
pub mod upload;
pub mod views;

pub mod components {
    // Localized page header with locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}
