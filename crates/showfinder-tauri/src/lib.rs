//! Showfinder Tauri Integration
//!
//! This crate exposes the showfinder controller as Tauri commands. The
//! webview forwards form and list events and swaps the returned HTML
//! fragments into `#show-list`, `#show-detail` and `#episode-list`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use showfinder_tauri::ShowFinderState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(ShowFinderState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             showfinder_tauri::commands::init_view,
//!             showfinder_tauri::commands::query_input,
//!             showfinder_tauri::commands::submit_search,
//!             showfinder_tauri::commands::select_show,
//!             showfinder_tauri::commands::current_view,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `init_view` - Initial document state (submit disabled)
//! - `query_input` - Query text changed
//! - `submit_search` - Search form submitted
//! - `select_show` - Result entry clicked
//! - `current_view` - Read the document without changing it

pub mod commands;

use std::sync::Arc;

use showfinder_core::{ApiClient, ClientConfig, Controller, SummaryPolicy};

/// Shared controller managed by Tauri.
///
/// Commands run concurrently; the controller sequences overlapping requests
/// itself, so no outer lock is needed.
pub struct ShowFinderState {
    controller: Arc<Controller>,
}

impl ShowFinderState {
    /// Create state against the public TVMaze API.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default(), SummaryPolicy::default())
    }

    /// Create state with a custom client configuration and summary policy.
    pub fn with_config(config: ClientConfig, policy: SummaryPolicy) -> Result<Self, String> {
        let client = ApiClient::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            controller: Arc::new(Controller::with_policy(client, policy)),
        })
    }

    /// Get a reference to the inner controller.
    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }
}
