//! Web dashboard
//!
//! Serves the single-page UI and a JSON API over HTTP:
//! - Page layout (headings, one dropdown per test, toggle button)
//! - Selection updates, each answered with freshly projected charts
//! - Stateless chart projection for an arbitrary selection
//! - Selection panel visibility

pub mod error;
pub mod routes;
pub mod server;
pub mod widgets;

pub use error::ApiError;
pub use server::{AppState, Dashboard, ServerConfig, build_router, start_server};
pub use widgets::PageLayout;
