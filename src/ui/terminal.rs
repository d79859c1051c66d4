//! Terminal presenter.
//!
//! Draws a [`TerminalView`] as one ANSI frame. The Zellij plugin prints the
//! frame from its render callback; every frame replaces the previous one.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TerminalView;

/// Renders the application state to an ANSI frame sized `rows` × `cols`.
///
/// ```rust
/// use tooldeck::{AppState, ui::render_terminal};
///
/// let state = AppState::new(tooldeck::domain::bundled_catalog(), Default::default());
/// let frame = render_terminal(&state, 24, 80);
/// assert!(frame.contains("tools found"));
/// ```
#[must_use]
pub fn render_terminal(state: &AppState, rows: usize, cols: usize) -> String {
    let view = state.compute_terminal_view(rows, cols);
    render_view(&view, state.theme(), rows, cols)
}

/// Renders a pre-computed terminal view.
#[must_use]
pub fn render_view(view: &TerminalView, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();
    components::render_screen(&mut canvas, view, theme, rows, cols);
    canvas.into_string()
}
