// Document layout - the portfolio rendered as a flat list of terminal lines
//
// The page is laid out once per terminal width: every section becomes a
// run of styled lines and its line range is recorded. From the scroll
// offset the document then derives the two geometric signals the resolver
// consumes: per-section visible fractions measured against a shrunk
// viewport band, and section top positions relative to the viewport.

use crate::content::{CertStatus, PortfolioContent};
use crate::sections::SectionId;
use crate::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The shrunk observation window: fractions of the viewport ignored at the
/// top and bottom. A section only counts as visible inside the remaining
/// central band.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub top_pct: u8,
    pub bottom_pct: u8,
}

impl Default for Band {
    fn default() -> Self {
        Self {
            top_pct: 20,
            bottom_pct: 70,
        }
    }
}

/// Word-wrap to a display width (unicode-width aware).
/// Words wider than the line get hard-split so nothing is lost.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split oversized words
        while word.width() > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let split = floor_char_boundary_by_width(word, width);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }

        let needed = if current_width == 0 {
            word.width()
        } else {
            current_width + 1 + word.width()
        };
        if needed > width && current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word.width();
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Byte index of the widest prefix not exceeding `width` columns.
/// Always lands on a char boundary; a single over-wide char is kept whole.
fn floor_char_boundary_by_width(s: &str, width: usize) -> usize {
    let mut acc = 0usize;
    for (idx, c) in s.char_indices() {
        let cw = c.width().unwrap_or(0);
        if acc + cw > width && idx > 0 {
            return idx;
        }
        acc += cw;
    }
    s.len()
}

/// Blank rows between sections. These belong to no section, so the
/// observation band can fall on pure whitespace mid-scroll - the moment
/// the resolver's intent bridging exists for.
pub const SECTION_GAP: usize = 4;

/// The laid-out page
pub struct Document {
    lines: Vec<Line<'static>>,
    ranges: Vec<(SectionId, Range<usize>)>,
    width: u16,
}

impl Document {
    /// Lay out the whole portfolio at the given text width
    pub fn build(content: &PortfolioContent, width: u16, theme: &Theme) -> Self {
        let mut builder = Builder::new(width, theme);

        builder.section(SectionId::Home, |b| b.hero(content));
        builder.gap();
        builder.section(SectionId::About, |b| b.about(content));
        builder.gap();
        builder.section(SectionId::Skills, |b| b.skills(content));
        builder.gap();
        builder.section(SectionId::Projects, |b| b.projects(content));
        builder.gap();
        builder.section(SectionId::Education, |b| b.education(content));
        builder.gap();
        builder.section(SectionId::Experience, |b| b.experience(content));
        builder.gap();
        builder.section(SectionId::Contact, |b| b.contact(content));

        Self {
            lines: builder.lines,
            ranges: builder.ranges,
            width,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Lines visible at the given offset/height (clamped)
    pub fn visible_lines(&self, offset: usize, height: usize) -> &[Line<'static>] {
        let start = offset.min(self.lines.len());
        let end = (offset + height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// First line of a section (scroll target for nav activation)
    pub fn section_start(&self, id: SectionId) -> Option<usize> {
        self.ranges
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, range)| range.start)
    }

    /// Section top positions in rows relative to the viewport top
    pub fn section_tops(&self, offset: usize) -> Vec<(SectionId, i32)> {
        self.ranges
            .iter()
            .map(|(id, range)| (*id, range.start as i32 - offset as i32))
            .collect()
    }

    /// Visible fraction of each section measured against the band.
    /// The fraction is the overlap with the band divided by the section's
    /// own height, mirroring an intersection ratio against a shrunk root.
    pub fn section_ratios(
        &self,
        offset: usize,
        viewport: usize,
        band: Band,
    ) -> Vec<(SectionId, f64)> {
        let band_top = offset + viewport * usize::from(band.top_pct) / 100;
        let band_len = viewport
            .saturating_sub(viewport * usize::from(band.top_pct) / 100)
            .saturating_sub(viewport * usize::from(band.bottom_pct) / 100)
            .max(1);
        let band_bottom = band_top + band_len;

        self.ranges
            .iter()
            .map(|(id, range)| {
                let overlap_start = range.start.max(band_top);
                let overlap_end = range.end.min(band_bottom);
                let overlap = overlap_end.saturating_sub(overlap_start);
                let len = range.len().max(1);
                (*id, overlap as f64 / len as f64)
            })
            .collect()
    }
}

/// Accumulates lines and section ranges during layout
struct Builder {
    lines: Vec<Line<'static>>,
    ranges: Vec<(SectionId, Range<usize>)>,
    width: usize,
    text: Style,
    muted: Style,
    heading: Style,
    accent: Style,
    tag: Style,
}

impl Builder {
    fn new(width: u16, theme: &Theme) -> Self {
        Self {
            lines: Vec::new(),
            ranges: Vec::new(),
            width: usize::from(width.max(20)),
            text: Style::default().fg(theme.text),
            muted: Style::default().fg(theme.muted),
            heading: Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
            accent: Style::default().fg(theme.accent),
            tag: Style::default().fg(theme.tag),
        }
    }

    fn section(&mut self, id: SectionId, render: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        self.push_heading(id.label());
        render(self);
        self.ranges.push((id, start..self.lines.len()));
    }

    /// Margin rows owned by no section
    fn gap(&mut self) {
        for _ in 0..SECTION_GAP {
            self.blank();
        }
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        self.lines.push(Line::from(spans));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push_heading(&mut self, label: &str) {
        let rule_width = self.width.saturating_sub(label.width() + 4).max(2);
        self.push(vec![
            Span::styled(format!("── {label} "), self.heading),
            Span::styled("─".repeat(rule_width), self.muted),
        ]);
        self.blank();
    }

    fn push_subheading(&mut self, label: &str) {
        self.push(vec![Span::styled(label.to_string(), self.heading)]);
    }

    fn wrapped(&mut self, text: &str, style: Style, indent: usize) {
        let pad = " ".repeat(indent);
        for line in wrap(text, self.width.saturating_sub(indent)) {
            self.push(vec![Span::styled(format!("{pad}{line}"), style)]);
        }
    }

    fn bullet(&mut self, text: &str) {
        let mut first = true;
        for line in wrap(text, self.width.saturating_sub(2)) {
            let prefix = if first { "• " } else { "  " };
            first = false;
            self.push(vec![Span::styled(format!("{prefix}{line}"), self.text)]);
        }
    }

    fn tags(&mut self, tags: &[&str]) {
        if tags.is_empty() {
            return;
        }
        let joined = tags
            .iter()
            .map(|t| format!("[{t}]"))
            .collect::<Vec<_>>()
            .join(" ");
        self.wrapped(&joined, self.tag, 0);
    }

    fn hero(&mut self, content: &PortfolioContent) {
        let basics = &content.basics;
        self.push(vec![Span::styled(
            basics.name.to_string(),
            self.heading.add_modifier(Modifier::UNDERLINED),
        )]);
        self.push(vec![Span::styled(basics.headline.to_string(), self.text)]);
        self.push(vec![Span::styled(
            format!("{} · {}", basics.location, basics.email),
            self.muted,
        )]);
        self.blank();
        for bullet in &content.hero.bullets {
            self.bullet(bullet);
        }
        self.blank();
        self.tags(&content.hero.quick_tags);
        self.blank();
        for cta in &content.hero.ctas {
            self.push(vec![
                Span::styled(format!("→ {}", cta.label), self.accent),
                Span::styled(format!("  {}", cta.href), self.muted),
            ]);
        }
        self.blank();
        for metric in &content.impact_metrics {
            let hint = metric
                .hint
                .map(|h| format!("  ({h})"))
                .unwrap_or_default();
            self.push(vec![
                Span::styled(format!("{:>4}  ", metric.value), self.heading),
                Span::styled(metric.label.to_string(), self.text),
                Span::styled(hint, self.muted),
            ]);
        }
    }

    fn about(&mut self, content: &PortfolioContent) {
        for paragraph in &content.about.paragraphs {
            self.wrapped(paragraph, self.text, 0);
            self.blank();
        }
        for highlight in &content.about.highlights {
            self.push_subheading(highlight.title);
            self.wrapped(highlight.description, self.muted, 2);
            self.blank();
        }
    }

    fn skills(&mut self, content: &PortfolioContent) {
        self.push(vec![Span::styled(
            "Press s to open the skill explorer".to_string(),
            self.muted,
        )]);
        self.blank();
        for group in &content.skill_groups {
            self.push(vec![
                Span::styled(group.name.to_string(), self.heading),
                Span::styled(format!("  ({})", group.items.len()), self.muted),
            ]);
            self.tags(&group.items);
            self.blank();
        }
    }

    fn projects(&mut self, content: &PortfolioContent) {
        for project in content.featured_projects() {
            self.push_subheading(project.title);
            self.wrapped(project.impact_line, self.text, 0);
            self.wrapped(project.description, self.muted, 0);
            self.project_links(project.links.github, project.links.demo);
            self.tags(&project.tech);
            self.blank();
        }
        self.push(vec![Span::styled("More projects".to_string(), self.heading)]);
        self.blank();
        for project in content.more_projects() {
            self.push_subheading(project.title);
            self.wrapped(project.impact_line, self.muted, 0);
            self.project_links(project.links.github, project.links.demo);
            self.blank();
        }
    }

    fn project_links(&mut self, github: Option<&str>, demo: Option<&str>) {
        let mut spans = Vec::new();
        if let Some(github) = github {
            spans.push(Span::styled(format!("GitHub: {github}  "), self.accent));
        }
        if let Some(demo) = demo {
            let label = if demo.contains("vercel.app") { "Vercel" } else { "Demo" };
            spans.push(Span::styled(format!("{label}: {demo}"), self.accent));
        }
        if !spans.is_empty() {
            self.push(spans);
        }
    }

    fn education(&mut self, content: &PortfolioContent) {
        for entry in &content.education.education {
            self.push_subheading(entry.school);
            self.wrapped(entry.degree, self.text, 0);
            self.push(vec![Span::styled(entry.dates.to_string(), self.muted)]);
            for detail in &entry.details {
                self.bullet(detail);
            }
            self.tags(&entry.tags);
            self.blank();
        }
        self.push(vec![Span::styled(
            "Certifications".to_string(),
            self.heading,
        )]);
        self.blank();
        for cert in &content.education.certifications {
            self.push_subheading(cert.name);
            let status = match cert.status {
                CertStatus::Completed => "completed",
                CertStatus::InProgress => "in progress",
            };
            self.push(vec![
                Span::styled(cert.issuer.to_string(), self.text),
                Span::styled(format!("  ({status})"), self.muted),
            ]);
            if let Some(date) = cert.date {
                self.push(vec![Span::styled(date.to_string(), self.muted)]);
            }
            if let Some(url) = cert.credential_url {
                self.push(vec![Span::styled(format!("Credential: {url}"), self.accent)]);
            }
            self.tags(&cert.tags);
            self.blank();
        }
    }

    fn experience(&mut self, content: &PortfolioContent) {
        for entry in &content.experience {
            self.push_subheading(entry.role);
            let org = match entry.location {
                Some(location) => format!("{} · {}", entry.org, location),
                None => entry.org.to_string(),
            };
            self.push(vec![
                Span::styled(org, self.text),
                Span::styled(format!("  {}", entry.dates), self.muted),
            ]);
            for bullet in &entry.bullets {
                self.bullet(bullet);
            }
            self.tags(&entry.tech);
            self.blank();
        }
    }

    fn contact(&mut self, content: &PortfolioContent) {
        self.wrapped(content.contact.blurb, self.text, 0);
        self.blank();
        for link in &content.contact.social {
            self.push(vec![
                Span::styled(format!("{:<10}", link.label), self.text),
                Span::styled(link.href.to_string(), self.accent),
            ]);
        }
        self.blank();
        self.push(vec![Span::styled(
            "Press y to copy the email address".to_string(),
            self.muted,
        )]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    fn doc() -> Document {
        Document::build(&portfolio(), 80, &Theme::auto())
    }

    #[test]
    fn every_section_gets_a_nonempty_range() {
        let doc = doc();
        for section in SectionId::ALL {
            let start = doc.section_start(section);
            assert!(start.is_some(), "missing range for {}", section.anchor());
        }
        assert_eq!(doc.section_start(SectionId::Home), Some(0));
    }

    #[test]
    fn sections_are_ordered_and_separated_by_gaps() {
        let doc = doc();
        let mut expected_start = 0;
        for (_, range) in &doc.ranges {
            assert_eq!(range.start, expected_start);
            assert!(!range.is_empty());
            expected_start = range.end + SECTION_GAP;
        }
        // No trailing gap after the last section.
        assert_eq!(expected_start - SECTION_GAP, doc.len());
    }

    #[test]
    fn tops_shift_with_scroll_offset() {
        let doc = doc();
        let at_zero = doc.section_tops(0);
        let at_ten = doc.section_tops(10);
        for (a, b) in at_zero.iter().zip(at_ten.iter()) {
            assert_eq!(a.1 - 10, b.1);
        }
    }

    #[test]
    fn ratio_is_zero_outside_the_band_and_positive_inside() {
        let doc = doc();
        // Band for a 40-row viewport with default insets: rows 8..12.
        let ratios = doc.section_ratios(0, 40, Band::default());
        let home = ratios
            .iter()
            .find(|(id, _)| *id == SectionId::Home)
            .map(|&(_, r)| r)
            .unwrap();
        assert!(home > 0.0, "home spans the band at offset 0");

        let contact = ratios
            .iter()
            .find(|(id, _)| *id == SectionId::Contact)
            .map(|&(_, r)| r)
            .unwrap();
        assert_eq!(contact, 0.0, "contact is far below the band");
    }

    #[test]
    fn ratios_never_exceed_one() {
        let doc = doc();
        for offset in (0..doc.len()).step_by(7) {
            for &(_, r) in &doc.section_ratios(offset, 50, Band::default()) {
                assert!((0.0..=1.0).contains(&r));
            }
        }
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("alpha beta gamma delta epsilon", 11);
        assert!(lines.iter().all(|l| l.width() <= 11));
        assert_eq!(lines.join(" "), "alpha beta gamma delta epsilon");
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap("supercalifragilistic", 6);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= 6));
        assert_eq!(lines.concat(), "supercalifragilistic");
    }

    #[test]
    fn visible_lines_clamps_at_the_end() {
        let doc = doc();
        let tail = doc.visible_lines(doc.len() - 3, 10);
        assert_eq!(tail.len(), 3);
        assert!(doc.visible_lines(doc.len() + 5, 10).is_empty());
    }
}
