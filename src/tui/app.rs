// TUI application state
//
// Owns everything the event loop mutates: the laid-out document, the scroll
// position, the active-section resolver and its observer, the skill
// explorer, and transient UI state (toast, view). All mutation happens on
// the UI task; handlers in tui::mod translate terminal events into calls
// here.

use super::clipboard::{self, CopyMethod};
use super::components::toast::Toast;
use super::document::{Band, Document};
use super::input::InputHandler;
use super::observer::ViewportObserver;
use super::scroll::PageScroll;
use crate::config::Config;
use crate::content::{self, PortfolioContent};
use crate::explorer::ExplorerState;
use crate::logging::{LogBuffer, LogLevel};
use crate::resolver::ActiveSectionResolver;
use crate::sections::SectionId;
use crate::theme::Theme;
use std::time::Instant;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Page, // The scrolling portfolio page
    Explorer, // Skill cross-filter
    Help,     // Keybindings
}

impl View {
    /// Get display name for status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Page => "Page",
            View::Explorer => "Explorer",
            View::Help => "Help",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// The content record everything renders from
    pub content: PortfolioContent,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current view being displayed
    pub view: View,

    /// Current color theme
    pub theme: Theme,

    /// Scroll state + smooth-scroll animation for the page
    pub scroll: PageScroll,

    /// Active-section resolution (drives the nav highlight)
    pub resolver: ActiveSectionResolver,

    /// Skill explorer state
    pub explorer: ExplorerState,

    /// Nav item under the keyboard cursor (Enter activates it)
    pub nav_cursor: usize,

    /// Transient notification (copy feedback)
    pub toast: Option<Toast>,

    /// Log buffer surfaced in the status bar
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Laid-out page; rebuilt when the width changes
    document: Option<Document>,

    /// Threshold filter between geometry and the resolver
    observer: ViewportObserver,

    /// Observation band derived from config
    band: Band,

    /// Initial section request (the hash-fragment analog), applied once
    /// the first layout exists
    pending_fragment: Option<SectionId>,

    /// Offset changed since the last frame; geometry must be re-sampled
    needs_observe: bool,

    /// Raw user scrolling happened since the last frame (rate-limited to
    /// one resolver notification per frame)
    user_scrolled: bool,
}

impl App {
    pub fn with_config(
        log_buffer: LogBuffer,
        config: &Config,
        initial_section: Option<SectionId>,
    ) -> Self {
        let theme = Theme::by_name(&config.theme);
        let resolver =
            ActiveSectionResolver::new(&SectionId::ALL, config.resolver.to_resolver_config());
        let band = Band {
            top_pct: config.resolver.band_top_pct,
            bottom_pct: config.resolver.band_bottom_pct,
        };

        Self {
            content: content::portfolio(),
            should_quit: false,
            view: View::default(),
            theme,
            scroll: PageScroll::new(),
            resolver,
            explorer: ExplorerState::new(),
            nav_cursor: 0,
            toast: None,
            log_buffer,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
            document: None,
            observer: ViewportObserver::default(),
            band,
            pending_fragment: initial_section,
            needs_observe: true,
            user_scrolled: false,
        }
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// (Re)build the document for the current terminal size.
    /// Called every frame before drawing; cheap when nothing changed.
    pub fn layout(&mut self, width: u16, viewport_height: u16, now: Instant) {
        let rebuild = self
            .document
            .as_ref()
            .is_none_or(|doc| doc.width() != width);
        if rebuild {
            self.document = Some(Document::build(&self.content, width, &self.theme));
            self.needs_observe = true;
        }

        let total = self.document.as_ref().map(Document::len).unwrap_or(0);
        self.scroll
            .update_dimensions(total, usize::from(viewport_height));

        // A --section request behaves like loading with a URL hash: a
        // one-shot intent plus a smooth scroll toward the target.
        if let Some(section) = self.pending_fragment.take() {
            self.navigate_to(section, now);
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Advance one animation frame: smooth scroll, visibility sampling,
    /// resolver notifications, toast expiry.
    pub fn on_tick(&mut self, now: Instant) {
        if self.scroll.tick() {
            self.needs_observe = true;
        }

        if let Some(doc) = self.document.as_ref() {
            let offset = self.scroll.offset();
            let tops = doc.section_tops(offset);

            if self.needs_observe {
                let ratios = doc.section_ratios(offset, self.scroll.viewport(), self.band);
                if let Some(updates) = self.observer.sample(&ratios) {
                    self.resolver.observe(&updates, now, &tops);
                }
            }

            // Raw scroll path: at most once per frame, and only meaningful
            // when the observer has gone quiet or nothing intersects.
            if self.user_scrolled {
                self.resolver.on_scroll(now, &tops);
            }
        }
        self.needs_observe = false;
        self.user_scrolled = false;

        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Nav activation: set the intent and start the smooth scroll
    pub fn navigate_to(&mut self, section: SectionId, now: Instant) {
        self.resolver.set_intent(section, now);
        self.nav_cursor = section.index();
        if let Some(target) = self
            .document
            .as_ref()
            .and_then(|doc| doc.section_start(section))
        {
            self.scroll.animate_to(target);
        }
        self.view = View::Page;
    }

    /// User-driven scrolling: cancels any pending intent and in-flight
    /// animation, then applies the movement.
    pub fn user_scroll(&mut self, movement: impl FnOnce(&mut PageScroll) -> bool) {
        self.resolver.cancel_intent();
        self.scroll.stop_animation();
        if movement(&mut self.scroll) {
            self.needs_observe = true;
            self.user_scrolled = true;
        }
    }

    /// Pointer press: the user grabbed the page (cancel intent only)
    pub fn pointer_down(&mut self) {
        self.resolver.cancel_intent();
    }

    /// Move the nav cursor left/right (wraps)
    pub fn move_nav_cursor(&mut self, forward: bool) {
        let len = SectionId::ALL.len();
        self.nav_cursor = if forward {
            (self.nav_cursor + 1) % len
        } else {
            (self.nav_cursor + len - 1) % len
        };
    }

    /// Section currently under the nav cursor
    pub fn nav_cursor_section(&self) -> SectionId {
        SectionId::ALL[self.nav_cursor.min(SectionId::ALL.len() - 1)]
    }

    /// Copy the contact email address, surfacing the outcome as a toast
    /// plus a status-line announcement.
    pub fn copy_email(&mut self) {
        let email = self.content.basics.email;
        match clipboard::copy_to_clipboard(email) {
            Ok(method) => {
                if method == CopyMethod::Osc52 {
                    tracing::debug!("copied email via OSC 52 fallback");
                }
                self.toast = Some(Toast::success(
                    format!("✓ Copied {email}"),
                    "Copied to clipboard.",
                ));
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.toast = Some(Toast::failure("✗ Copy failed", "Copy failed."));
            }
        }
    }

    /// Status-line announcement: copy outcome while the toast is alive,
    /// otherwise the most recent warning from the log buffer.
    pub fn status_announcement(&self) -> Option<String> {
        if let Some(toast) = &self.toast {
            return Some(toast.announcement.clone());
        }
        self.log_buffer
            .last_at_least(LogLevel::Warn)
            .map(|entry| format!("{}: {}", entry.level.as_str(), entry.message))
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_config(LogBuffer::new(), &Config::default(), None)
    }

    fn laid_out_app() -> App {
        let mut app = app();
        app.layout(80, 30, Instant::now());
        app
    }

    #[test]
    fn layout_builds_the_document_once_per_width() {
        let mut app = app();
        let now = Instant::now();
        app.layout(80, 30, now);
        let len = app.document().unwrap().len();

        app.layout(80, 30, now);
        assert_eq!(app.document().unwrap().len(), len);

        // Narrower text wraps into more lines.
        app.layout(40, 30, now);
        assert!(app.document().unwrap().len() > len);
    }

    #[test]
    fn initial_fragment_starts_an_intent_and_animation() {
        let mut app = App::with_config(
            LogBuffer::new(),
            &Config::default(),
            Some(SectionId::Contact),
        );
        let t0 = Instant::now();
        app.layout(80, 30, t0);
        assert!(app.scroll.is_animating());
        assert_eq!(app.nav_cursor_section(), SectionId::Contact);
    }

    #[test]
    fn intent_bridges_the_gap_between_sections() {
        let mut app = App::with_config(
            LogBuffer::new(),
            &Config::default(),
            Some(SectionId::Contact),
        );
        let t0 = Instant::now();
        app.layout(80, 30, t0);

        // Park the viewport so the observation band (rows 6..9 of a 30-row
        // viewport) falls entirely inside the margin before About: nothing
        // intersects, so the live intent decides the highlight.
        let about_start = app
            .document()
            .unwrap()
            .section_start(SectionId::About)
            .unwrap();
        app.scroll.stop_animation();
        app.scroll.scroll_by(about_start as i64 - 10);
        app.on_tick(t0);
        assert_eq!(app.resolver.active(), SectionId::Contact);
    }

    #[test]
    fn user_scroll_cancels_animation() {
        let mut app = laid_out_app();
        let now = Instant::now();
        app.navigate_to(SectionId::Experience, now);
        assert!(app.scroll.is_animating());

        app.user_scroll(|s| s.scroll_by(1));
        assert!(!app.scroll.is_animating());
    }

    #[test]
    fn scrolling_to_a_section_activates_it() {
        let mut app = laid_out_app();
        let now = Instant::now();
        let target = app
            .document()
            .unwrap()
            .section_start(SectionId::Experience)
            .unwrap();

        app.user_scroll(|s| s.scroll_by(target as i64));
        app.on_tick(now);
        assert_eq!(app.resolver.active(), SectionId::Experience);
    }

    #[test]
    fn nav_cursor_wraps_both_ways() {
        let mut app = app();
        app.move_nav_cursor(false);
        assert_eq!(app.nav_cursor_section(), SectionId::Contact);
        app.move_nav_cursor(true);
        assert_eq!(app.nav_cursor_section(), SectionId::Home);
    }
}
