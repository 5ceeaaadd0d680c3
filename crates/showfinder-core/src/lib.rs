//! Showfinder Core Library
//!
//! This crate provides the core of a TV show browser backed by the TVMaze
//! directory API (<https://api.tvmaze.com>).
//!
//! # Features
//! - Search shows by name
//! - Show details and the episode list grouped by season
//! - Rendering into an in-memory document that serialises to HTML
//! - Stale responses from overlapping requests are discarded
//!
//! # Example
//! ```no_run
//! use showfinder_core::{ApiClient, ClickTarget, Controller};
//!
//! # async fn example() -> Result<(), showfinder_core::ShowFinderError> {
//! let controller = Controller::new(ApiClient::new()?);
//! controller.on_input("batman").await;
//! controller.on_submit().await;
//!
//! let first = {
//!     let view = controller.view().await;
//!     let target = view.entries().first().map(|entry| ClickTarget::from_element(entry));
//!     target
//! };
//! if let Some(target) = first {
//!     controller.on_click(&target).await;
//! }
//! println!("{}", controller.snapshot().await.show_detail);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod controller;
pub mod dom;
pub mod error;
pub mod render;
pub mod sanitize;
pub mod season;
pub mod types;
pub mod view;

// Re-export main types for convenience
pub use client::{ApiClient, ClientConfig};
pub use controller::{ClickTarget, Controller, Outcome};
pub use error::{Result, ShowFinderError};
pub use render::{render_result_list, render_show_detail};
pub use sanitize::{sanitize_summary, SummaryPolicy};
pub use season::{group_by_season, SeasonGroup, SeasonGroups};
pub use types::{Episode, Externals, SearchHit, ShowImage, ShowSummary};
pub use view::{ViewModel, ViewSnapshot};
