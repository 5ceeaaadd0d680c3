//! Tauri commands for showfinder
//!
//! Every command returns the full view snapshot after handling its event, so
//! the frontend can re-render from a single source of truth.

use tauri::State;
use tracing::debug;

use crate::ShowFinderState;
use showfinder_core::{ClickTarget, Outcome, ViewSnapshot};

/// Initial view: empty containers, submit control disabled.
#[tauri::command]
pub async fn init_view(state: State<'_, ShowFinderState>) -> Result<ViewSnapshot, String> {
    Ok(state.controller().snapshot().await)
}

/// The query field changed.
///
/// # Arguments
/// * `text` - Current content of the query field
#[tauri::command]
pub async fn query_input(
    state: State<'_, ShowFinderState>,
    text: String,
) -> Result<ViewSnapshot, String> {
    let controller = state.controller();
    controller.on_input(&text).await;
    Ok(controller.snapshot().await)
}

/// The search form was submitted.
///
/// # Returns
/// * `Ok(ViewSnapshot)` after a render, or unchanged when ignored or superseded
/// * `Err(String)` with the error message if the search failed
#[tauri::command]
pub async fn submit_search(state: State<'_, ShowFinderState>) -> Result<ViewSnapshot, String> {
    let controller = state.controller();
    into_snapshot(controller.on_submit().await, controller.snapshot().await)
}

/// A result entry was clicked.
///
/// # Arguments
/// * `show_id` - The `data-id` carried by the clicked entry
#[tauri::command]
pub async fn select_show(
    state: State<'_, ShowFinderState>,
    show_id: String,
) -> Result<ViewSnapshot, String> {
    let controller = state.controller();
    let outcome = controller.on_click(&ClickTarget::Entry { show_id }).await;
    into_snapshot(outcome, controller.snapshot().await)
}

/// Current view without handling any event.
#[tauri::command]
pub async fn current_view(state: State<'_, ShowFinderState>) -> Result<ViewSnapshot, String> {
    Ok(state.controller().snapshot().await)
}

fn into_snapshot(outcome: Outcome, snapshot: ViewSnapshot) -> Result<ViewSnapshot, String> {
    match outcome {
        Outcome::Failed(e) => Err(e.to_string()),
        other => {
            debug!(outcome = ?other, "command handled");
            Ok(snapshot)
        }
    }
}
