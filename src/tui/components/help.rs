// Help view - keybinding reference

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("1-7", "Jump to a section (sets a short-lived nav intent)"),
    ("Tab / Shift+Tab", "Move the nav cursor"),
    ("Enter", "Activate the nav cursor's section"),
    ("↑ ↓ / j k", "Scroll one line (cancels a pending nav intent)"),
    ("PgUp / PgDn / Space", "Scroll one page"),
    ("Home / End", "Jump to top / bottom"),
    ("s", "Open the skill explorer"),
    ("y", "Copy the contact email to the clipboard"),
    ("?", "This help"),
    ("Esc", "Back to the page"),
    ("q / Ctrl+C", "Quit"),
    ("", ""),
    ("Explorer:", ""),
    ("type / Backspace", "Edit the skill search query"),
    ("↑ ↓", "Move between skills"),
    ("Enter", "Filter by the highlighted skill (again to clear)"),
    ("Tab / Shift+Tab", "Switch result tab"),
    ("Ctrl+E", "Expand / collapse experience entries"),
    ("Esc", "Clear selection, then query, then close"),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (keys, description) in BINDINGS {
        if keys.is_empty() && description.is_empty() {
            lines.push(Line::default());
            continue;
        }
        if description.is_empty() {
            lines.push(Line::from(Span::styled(
                keys.to_string(),
                Style::default().fg(theme.heading),
            )));
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<20}"), Style::default().fg(theme.highlight)),
            Span::styled(description.to_string(), Style::default().fg(theme.text)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
