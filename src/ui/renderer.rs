//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into
//! a [`UIViewModel`](crate::ui::UIViewModel), then the components print it.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout using the state's active theme.
///
/// Does not clear the screen; every row it owns is padded to `cols`.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, state.theme(), cols, rows);
}
