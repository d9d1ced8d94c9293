//! Top-level rendering coordinator.
//!
//! Computes the view model and hands each screen to its layout in
//! [`components`]. Header and footer are shared by every route; the body
//! between them depends on the route.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane per render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let _span = tracing::trace_span!("render", rows, cols, route = %state.route).entered();

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let body_start = components::render_frame_top(&vm.header, theme, cols);

    match &vm.body {
        Body::Gallery(gallery) => components::render_gallery(body_start, gallery, theme, cols, rows),
        Body::Detail(detail) => components::render_detail(body_start, detail, theme, cols, rows),
        Body::NotFound(not_found) => components::render_not_found(body_start, not_found, theme, cols),
    }

    components::render_frame_bottom(&vm.footer, theme, cols, rows);
}
