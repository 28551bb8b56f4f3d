// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, animation ticks)
// - Translating terminal events into resolver and explorer inputs
//
// The resolver's cancellation contract lives here: wheel scrolling, mouse
// presses, and navigation keys all drop a pending nav intent because the
// user has taken over from the programmatic smooth scroll.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod document;
pub mod input;
pub mod layout;
pub mod observer;
pub mod scroll;
pub mod ui;

use crate::config::Config;
use crate::explorer::{experience_id, Tab};
use crate::logging::LogBuffer;
use crate::sections::SectionId;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Startup options resolved from CLI flags
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Initial section (the URL-hash analog), already validated
    pub initial_section: Option<SectionId>,
}

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(
    config: Config,
    options: StartupOptions,
    log_buffer: LogBuffer,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, &config, options.initial_section);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two kinds of wakeups: keyboard/mouse input, and the animation tick.
/// The tick doubles as the frame boundary for the resolver: geometry is
/// sampled and the raw-scroll signal delivered at most once per tick.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // 20 FPS: smooth enough for the scroll animation
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        let size = terminal.size().context("Failed to query terminal size")?;
        app.layout(size.width, ui::content_height(size.height), Instant::now());

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Animation frame: smooth scroll + resolver notifications
            _ = tick_interval.tick() => {
                app.on_tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {}
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        _ => return,
    }

    // Ctrl+C quits from anywhere (the explorer eats plain letters)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        app.should_quit = true;
        return;
    }

    match app.view {
        View::Explorer => handle_explorer_key(app, key_event),
        View::Page | View::Help => handle_page_key(app, key_event),
    }
}

/// Keys on the page (and help) views
fn handle_page_key(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;
    let now = Instant::now();

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
        }
        // View switching
        KeyCode::Char('s') | KeyCode::Char('S') => {
            if app.handle_key_press(key) {
                app.view = View::Explorer;
            }
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.view = View::Help;
            }
        }
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.view = View::Page;
            }
        }
        // Clipboard
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                app.copy_email();
            }
        }
        // Direct section jumps (the nav-click analog: intent + smooth scroll)
        KeyCode::Char(c @ '1'..='7') => {
            if app.handle_key_press(key) {
                let idx = (c as usize) - ('1' as usize);
                app.navigate_to(SectionId::ALL[idx], now);
            }
        }
        // Nav cursor
        KeyCode::Tab => {
            if app.handle_key_press(key) {
                app.move_nav_cursor(true);
            }
        }
        KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.move_nav_cursor(false);
            }
        }
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                app.navigate_to(app.nav_cursor_section(), now);
            }
        }
        // Scrolling: user input, cancels any pending nav intent
        KeyCode::Up | KeyCode::Char('k') => {
            if app.handle_key_press(key) {
                app.user_scroll(|s| s.scroll_by(-1));
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.handle_key_press(key) {
                app.user_scroll(|s| s.scroll_by(1));
            }
        }
        KeyCode::PageUp => {
            if app.handle_key_press(key) {
                app.user_scroll(|s| s.page_up());
            }
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            if app.handle_key_press(key) {
                app.user_scroll(|s| s.page_down());
            }
        }
        KeyCode::Home => {
            if app.handle_key_press(key) {
                app.user_scroll(|s| s.to_top());
            }
        }
        KeyCode::End => {
            if app.handle_key_press(key) {
                app.user_scroll(|s| s.to_bottom());
            }
        }
        _ => {}
    }
}

/// Keys in the skill explorer. Plain characters feed the query, so the
/// page-view shortcuts don't apply here.
fn handle_explorer_key(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    match key {
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                // Esc chain: first clears the selection, then the query,
                // then leaves the explorer.
                if app.explorer.selected.is_some() || !app.explorer.expanded.is_empty() {
                    app.explorer.selected = None;
                    app.explorer.expanded.clear();
                    app.explorer.set_active_tab(Tab::Projects);
                } else if !app.explorer.query.trim().is_empty() {
                    app.explorer.set_query(String::new());
                } else {
                    app.view = View::Page;
                }
            }
        }
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                app.explorer.select_at_cursor(&app.content);
            }
        }
        KeyCode::Up => {
            if app.handle_key_press(key) {
                app.explorer.move_cursor(&app.content, -1);
            }
        }
        KeyCode::Down => {
            if app.handle_key_press(key) {
                app.explorer.move_cursor(&app.content, 1);
            }
        }
        KeyCode::Tab => {
            if app.handle_key_press(key) {
                app.explorer.cycle_tab(&app.content, true);
            }
        }
        KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.explorer.cycle_tab(&app.content, false);
            }
        }
        // Expand/collapse the experience results
        KeyCode::Char('e') | KeyCode::Char('E')
            if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            let ids: Vec<String> = app
                .explorer
                .related_experience(&app.content)
                .iter()
                .map(|entry| experience_id(entry))
                .collect();
            for id in ids {
                app.explorer.toggle_expanded(&id);
            }
        }
        // Text entry (no debounce - every keystroke counts)
        KeyCode::Backspace => {
            app.explorer.pop_query_char();
        }
        KeyCode::Char(c) if key_event.modifiers.is_empty()
            || key_event.modifiers == KeyModifiers::SHIFT =>
        {
            app.explorer.push_query_char(c);
        }
        _ => {}
    }

    app.explorer.ensure_valid_tab(&app.content);
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => match app.view {
            View::Explorer => app.explorer.move_cursor(&app.content, -1),
            // Wheel input: the user took over from any programmatic scroll
            _ => app.user_scroll(|s| s.scroll_by(-3)),
        },
        MouseEventKind::ScrollDown => match app.view {
            View::Explorer => app.explorer.move_cursor(&app.content, 1),
            _ => app.user_scroll(|s| s.scroll_by(3)),
        },
        // A press means the user grabbed the page
        MouseEventKind::Down(_) => app.pointer_down(),
        _ => {}
    }
}
