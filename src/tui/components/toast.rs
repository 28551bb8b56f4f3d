//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content. The
//! paired `announcement` is plain text the status bar mirrors while the
//! toast is alive (the screen-reader live-region analog).

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays visible
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
pub struct Toast {
    /// Message to display
    pub message: String,
    /// Plain-text announcement mirrored in the status bar
    pub announcement: String,
    /// Success or failure styling
    pub ok: bool,
    /// When the toast was created
    created_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>, announcement: impl Into<String>) -> Self {
        Self::new(message, announcement, true)
    }

    pub fn failure(message: impl Into<String>, announcement: impl Into<String>) -> Self {
        Self::new(message, announcement, false)
    }

    fn new(message: impl Into<String>, announcement: impl Into<String>, ok: bool) -> Self {
        Self {
            message: message.into(),
            announcement: announcement.into(),
            ok,
            created_at: Instant::now(),
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` to ensure the toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Width: message plus borders and a space of padding each side
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let border_color = if self.ok { theme.ok } else { theme.fail };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text))
            .block(block);

        // Clear the area first so the toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
