//! # neuro-dashboard - Patient Performance Dashboard
//!
//! A single-page dashboard for neuropsychological assessment results.
//! A clinician picks a qualitative level for each of seven tests and two
//! charts show the resulting profile against a reference baseline.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the dashboard on http://127.0.0.1:8050
//! neuro-dashboard
//!
//! # Print the chart figures for a selection and exit
//! neuro-dashboard --print --set abfw=superior --set prolec=inferior
//! ```
//!
//! ## Levels
//!
//! | Level    | Rank | Color                    |
//! |----------|------|--------------------------|
//! | Superior | 3    | `rgba(76, 187, 23, 0.6)` |
//! | Adequado | 2    | `rgba(40, 116, 166, 0.6)`|
//! | Inferior | 1    | `rgba(219, 50, 54, 0.6)` |
//!
//! Adequado (rank 2) is the reference baseline on both charts.

pub mod catalog;
pub mod config;
pub mod panel;
pub mod projector;
pub mod selection;
pub mod web;

pub use catalog::{BASELINE_RANK, CATALOG, LEVELS, Level, Rgba, TEST_COUNT, Test};
pub use config::{ConfigError, DashboardConfig, DisplaySection, ServerSection, load_config};
pub use panel::{PanelState, PanelToggle, PanelVisibility};
pub use projector::{ChartLabels, Charts, Figure, Trace, project};
pub use selection::{Selection, SelectionError};
