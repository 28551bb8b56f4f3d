// Skill explorer view
//
// Left: the query box and the filtered skill groups, with a keyboard
// cursor over the skills. Right: everything tagged with the selected
// skill, split across the result tabs. Pure rendering; the filtering
// itself lives in crate::explorer.

use crate::explorer::{experience_id, normalize, Tab};
use crate::tui::app::App;
use crate::tui::document::wrap;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_skills(f, columns[0], app);
    render_results(f, columns[1], app);
}

fn render_skills(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let explorer = &app.explorer;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(theme.text)),
        Span::styled(
            format!("{}▏", explorer.query),
            Style::default().fg(theme.highlight),
        ),
    ]));
    lines.push(Line::default());

    let groups = explorer.filtered_groups(&app.content);
    if groups.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No skills match \u{201c}{}\u{201d}.", explorer.query.trim()),
            Style::default().fg(theme.muted),
        )));
    }

    // Flattened skill index drives the cursor; remember which rendered
    // line the cursor lands on so the window can follow it.
    let mut skill_idx = 0usize;
    let mut cursor_line = 0usize;
    let selected_norm = explorer.selected.as_deref().map(normalize);

    for group in &groups {
        lines.push(Line::from(vec![
            Span::styled(
                group.group.name.to_string(),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", group.items.len()),
                Style::default().fg(theme.muted),
            ),
        ]));
        for &skill in &group.items {
            let is_cursor = skill_idx == explorer.cursor;
            let is_selected = selected_norm.as_deref() == Some(normalize(skill).as_str());

            let mut style = if is_selected {
                Style::default().fg(theme.tag_selected)
            } else {
                Style::default().fg(theme.tag)
            };
            if is_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if is_cursor {
                cursor_line = lines.len();
            }

            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("[{skill}]"), style),
            ]));
            skill_idx += 1;
        }
        lines.push(Line::default());
    }

    // Window the list so the cursor stays visible.
    let height = usize::from(area.height.saturating_sub(2));
    let start = cursor_line.saturating_sub(height.saturating_sub(1).max(1) / 2);
    let start = start.min(lines.len().saturating_sub(height.min(lines.len())));
    let visible: Vec<Line> = lines.into_iter().skip(start).take(height.max(1)).collect();

    let panel = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(panel, area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let explorer = &app.explorer;
    let width = usize::from(area.width.saturating_sub(3)).max(10);

    let mut lines: Vec<Line> = Vec::new();

    let Some(selected) = explorer.selected.clone() else {
        lines.push(Line::from(Span::styled(
            "Pick a skill to see everything tagged with it.",
            Style::default().fg(theme.muted),
        )));
        draw_results(f, area, app, lines);
        return;
    };

    lines.push(Line::from(vec![
        Span::styled("Related to: ", Style::default().fg(theme.text)),
        Span::styled(
            selected.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    // Tab strip: only tabs with matches, counts attached.
    let visible_tabs = explorer.visible_tabs(&app.content);
    let counts = explorer.counts(&app.content);
    if visible_tabs.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "No matches yet — tag more items with this skill.",
            Style::default().fg(theme.muted),
        )));
        draw_results(f, area, app, lines);
        return;
    }

    let mut tab_spans: Vec<Span> = Vec::new();
    for tab in &visible_tabs {
        let count = counts
            .iter()
            .find(|(t, _)| t == tab)
            .map(|&(_, n)| n)
            .unwrap_or(0);
        let style = if *tab == explorer.active_tab() {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        tab_spans.push(Span::styled(format!("{} ({count})", tab.label()), style));
        tab_spans.push(Span::raw("  "));
    }
    lines.push(Line::from(tab_spans));
    lines.push(Line::default());

    match explorer.active_tab() {
        Tab::Projects => {
            for project in explorer.related_projects(&app.content) {
                push_title(&mut lines, theme, project.title);
                push_wrapped(&mut lines, theme.muted, project.impact_line, width);
                push_tags(&mut lines, theme, &project.tech);
                lines.push(Line::default());
            }
        }
        Tab::Experience => {
            for entry in explorer.related_experience(&app.content) {
                let id = experience_id(entry);
                let expanded = explorer.expanded.contains(&id);

                push_title(&mut lines, theme, entry.role);
                push_wrapped(
                    &mut lines,
                    theme.muted,
                    &format!("{} · {}", entry.org, entry.dates),
                    width,
                );
                let shown = if expanded { entry.bullets.len() } else { 2 };
                for bullet in entry.bullets.iter().take(shown) {
                    push_wrapped(&mut lines, theme.text, &format!("• {bullet}"), width);
                }
                if entry.bullets.len() > 2 {
                    let more = entry.bullets.len() - 2;
                    let note = if expanded {
                        "Ctrl+E collapse".to_string()
                    } else {
                        format!("(+{more} more — Ctrl+E to expand)")
                    };
                    lines.push(Line::from(Span::styled(
                        note,
                        Style::default().fg(theme.muted),
                    )));
                }
                lines.push(Line::default());
            }
        }
        Tab::Education => {
            for entry in explorer.related_education(&app.content) {
                push_title(&mut lines, theme, entry.school);
                push_wrapped(&mut lines, theme.muted, entry.degree, width);
                push_wrapped(&mut lines, theme.muted, entry.dates, width);
                lines.push(Line::default());
            }
        }
        Tab::Certifications => {
            for cert in explorer.related_certifications(&app.content) {
                push_title(&mut lines, theme, cert.name);
                push_wrapped(&mut lines, theme.muted, cert.issuer, width);
                if let Some(date) = cert.date {
                    push_wrapped(&mut lines, theme.muted, date, width);
                }
                lines.push(Line::default());
            }
        }
    }

    draw_results(f, area, app, lines);
}

fn push_title(lines: &mut Vec<Line>, theme: &crate::theme::Theme, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    )));
}

fn push_wrapped(lines: &mut Vec<Line>, color: ratatui::style::Color, text: &str, width: usize) {
    for line in wrap(text, width) {
        lines.push(Line::from(Span::styled(line, Style::default().fg(color))));
    }
}

fn push_tags(lines: &mut Vec<Line>, theme: &crate::theme::Theme, tags: &[&str]) {
    let joined = tags
        .iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(Line::from(Span::styled(
        joined,
        Style::default().fg(theme.tag),
    )));
}

fn draw_results(f: &mut Frame, area: Rect, app: &App, lines: Vec<Line>) {
    let height = usize::from(area.height);
    let visible: Vec<Line> = lines.into_iter().take(height.max(1)).collect();
    let panel = Paragraph::new(visible)
        .block(Block::default().style(Style::default().fg(app.theme.text)));
    f.render_widget(panel, area);
}
