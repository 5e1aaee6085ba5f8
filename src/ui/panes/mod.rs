//! Viewer pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: BASIC source with syntax highlighting and the error line marked
//! - [`output`]: Generated C with syntax highlighting
//! - [`status`]: Status bar with the compile result and keybindings
//!
//! Each pane module exports one `render_*` function. Scroll offsets are owned
//! by [`App`](super::App) and clamped here against the visible height.

pub mod output;
pub mod source;
pub mod status;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

use super::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `offset` so the last page stays full, and return the visible height.
pub(crate) fn clamp_scroll(offset: &mut usize, total_lines: usize, area: Rect) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }

    visible_height
}
