// Status bar component
//
// Bottom line: current view, active section fragment, scroll progress,
// uptime, and either the copy-outcome announcement or the most recent
// warning from the log buffer.

use crate::tui::app::{App, View};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let progress = (app.scroll.progress() * 100.0).round() as u8;
    let mut left = format!(
        " {} │ #{} │ {:>3}%",
        app.view.name(),
        app.resolver.active().anchor(),
        progress,
    );
    if bp.at_least(Breakpoint::Wide) {
        left.push_str(&format!(" │ {}", app.uptime()));
    }

    let hint = match app.view {
        View::Page => "1-7 jump · s skills · y copy email · ? help · q quit",
        View::Explorer => "type to search · ↑↓ select · Enter filter · Esc back",
        View::Help => "Esc back · q quit",
    };

    let mut spans = vec![Span::styled(left, Style::default().fg(app.theme.status_bar))];
    if let Some(announcement) = app.status_announcement() {
        spans.push(Span::styled(
            format!(" │ {announcement}"),
            Style::default().fg(app.theme.highlight),
        ));
    } else if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::styled(
            format!(" │ {hint}"),
            Style::default().fg(app.theme.muted),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(app.theme.border)),
    );

    f.render_widget(status, area);
}
