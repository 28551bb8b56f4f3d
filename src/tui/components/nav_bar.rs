// Sticky nav bar
//
// One line of section labels plus a rule underneath. The label of the
// resolver's active section is highlighted; the keyboard cursor (activated
// with Enter) is underlined. Narrow terminals drop the number hints.

use crate::sections::SectionId;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let active = app.resolver.active();
    let cursor = app.nav_cursor_section();

    let mut spans: Vec<Span> = Vec::with_capacity(SectionId::ALL.len() * 2 + 1);
    spans.push(Span::raw(" "));
    for (idx, section) in SectionId::ALL.into_iter().enumerate() {
        let mut style = if section == active {
            Style::default()
                .fg(app.theme.nav_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.nav_inactive)
        };
        if section == cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let label = if bp.at_least(Breakpoint::Normal) {
            format!("{} {}", idx + 1, section.label())
        } else {
            section.label().to_string()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.border))
            .title(Span::styled(
                format!(" {} ", app.content.basics.name),
                Style::default().fg(app.theme.title),
            )),
    );

    f.render_widget(nav, area);
}
