//! Split TUI - Actor-based shared expense tracker
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use split_tui::app::{AppActor, AppState};
use split_tui::config::Config;
use split_tui::constants::{APP_NAME, APP_VERSION};
use split_tui::forms::AddFriendForm;
use split_tui::messages::ui_events::key_to_ui_event;
use split_tui::messages::{BalanceFormView, Focus, RenderState, UiEvent};
use split_tui::ui::{centered_rect, composer_label, cursor_x, render_friend_row, render_input};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = Config::load();

    // Initialize logging to file
    let file_appender = config.log_appender()?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(config.log_level())
        .init();
    if let Some(e) = config_error {
        tracing::warn!(error = %format!("{:#}", e), "Invalid config, using defaults");
    }
    tracing::info!(version = APP_VERSION, avatar = %config.avatar_base_url, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let state = AppState::new(AddFriendForm::new(config.avatar_base_url.clone()));
    let app_actor = AppActor::new(state, render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx, tick_rate).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.focus, current_state.show_help) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let title = Paragraph::new(format!(" {} v{} ", APP_NAME, APP_VERSION))
        .style(Style::default().fg(Color::Black).bg(Color::Cyan).bold());
    f.render_widget(title, main_chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[1]);

    draw_sidebar(f, state, columns[0]);

    match &state.balance_form {
        Some(form) => draw_balance_form(f, state, form, columns[1]),
        None => draw_balance_placeholder(f, columns[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_sidebar(f: &mut Frame, state: &RenderState, area: Rect) {
    let composer_height = if state.composer_open { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                  // Friend list
            Constraint::Length(composer_height), // Composer
            Constraint::Length(1),               // Composer toggle
        ])
        .split(area);

    draw_friend_list(f, state, chunks[0]);

    if state.composer_open {
        draw_composer(f, state, chunks[1]);
    }

    let button = Paragraph::new(format!(" [a] {} ", composer_label(state.composer_open)))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(button, chunks[2]);
}

fn draw_friend_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::FriendList;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = state.friends.iter().map(render_friend_row).collect();

    let highlight_style = if is_focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Friends ({}) ", state.friends.len())))
        .highlight_style(highlight_style);

    let mut list_state = ListState::default();
    list_state.select(Some(state.highlighted));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_composer(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    draw_field(f, &state.add_name, " Friend name ", state.focus == Focus::AddName, chunks[0]);
    draw_field(f, &state.add_image, " Image URL ", state.focus == Focus::AddImage, chunks[1]);
}

fn draw_balance_form(f: &mut Frame, state: &RenderState, form: &BalanceFormView, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" Split a bill with {} ", form.friend_name));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let you_title = format!(" You gave to {} ", form.friend_name);
    let friend_title = format!(" {} gave to you ", form.friend_name);
    draw_field(f, &form.you_gave, &you_title, state.focus == Focus::YouGave, chunks[0]);
    draw_field(f, &form.friend_gave, &friend_title, state.focus == Focus::FriendGave, chunks[1]);

    let hint = Paragraph::new(" Enter: update balance ")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[2]);
}

fn draw_balance_placeholder(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Select a friend to split a bill.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Split a bill "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_field(f: &mut Frame, content: &str, title: &str, is_focused: bool, area: Rect) {
    f.render_widget(render_input(content, title, is_focused), area);

    if is_focused {
        f.set_cursor_position(Position::new(cursor_x(area, content), area.y + 1));
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.focus != Focus::FriendList {
        " Enter:submit | Tab:next field | Esc:back to list "
    } else {
        " ↑/↓:move | Enter:select | a:add friend | Tab:forms | ?:help | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 SPLIT TUI - Keyboard Shortcuts

 FRIENDS
   ↑ / ↓, k / j       Move highlight
   Enter / Space      Select or close highlighted friend
   a                  Open or close the add-friend form

 FORMS
   Tab / Shift+Tab    Cycle through visible fields
   Enter              Submit the focused form
   Esc                Back to the friend list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
