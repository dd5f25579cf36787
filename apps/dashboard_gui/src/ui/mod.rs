//! UI layer for the console: app shell, workspace views, assistant widget, and theme.

pub mod app;
pub mod assistant;
pub mod theme;
pub mod views;

pub use app::{DashboardGuiApp, StartupConfig};
