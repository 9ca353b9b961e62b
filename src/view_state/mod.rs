//! View-only state derived from the App for pure rendering.
//!
//! UI components render from these types instead of reaching into the App,
//! keeping the render path free of business logic.

mod app_view;
mod dashboard_view;
mod detection_view;

pub use app_view::AppViewState;
pub use dashboard_view::DashboardViewState;
pub use detection_view::DetectionViewState;
