// Top-level drawing - screen layout and view dispatch
//
// Fixed chrome (nav bar on top, status bar at the bottom) around the
// current view. The page view renders the document slice at the scroll
// offset with a scrollbar; the toast overlays everything.

use super::app::{App, View};
use super::components::{explorer_panel, help, nav_bar, status_bar};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Nav line plus its rule
pub const NAV_HEIGHT: u16 = 2;
/// Rule plus the status line
pub const STATUS_HEIGHT: u16 = 2;

/// Rows available to the content view for a given terminal height
pub fn content_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(NAV_HEIGHT + STATUS_HEIGHT)
}

/// Render the whole UI
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    nav_bar::render(f, chunks[0], app);

    match app.view {
        View::Page => render_page(f, chunks[1], app),
        View::Explorer => explorer_panel::render(f, chunks[1], app),
        View::Help => help::render(f, chunks[1], app),
    }

    status_bar::render(f, chunks[2], app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

fn render_page(f: &mut Frame, area: Rect, app: &App) {
    let Some(doc) = app.document() else {
        return;
    };

    let offset = app.scroll.offset();
    let lines = doc
        .visible_lines(offset, usize::from(area.height))
        .to_vec();
    f.render_widget(Paragraph::new(lines), area);

    if doc.len() > usize::from(area.height) {
        let mut state = ScrollbarState::new(doc.len().saturating_sub(usize::from(area.height)))
            .position(offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}
