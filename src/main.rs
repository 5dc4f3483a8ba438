//! Hitman - a terminal HTTP client driven by a tiny request language
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - draft editing and result navigation
//! - Network Layer (Tokio) - parsing, sending and formatting requests

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use hitman_tui::app::AppActor;
use hitman_tui::constants::LOG_FILE_NAME;
use hitman_tui::messages::ui_events::key_to_ui_event;
use hitman_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use hitman_tui::network::NetworkActor;
use hitman_tui::ui;

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
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor; it saves the draft before finishing
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    if let Err(e) = app_handle.await {
        tracing::warn!(error = %e, "App actor did not shut down cleanly");
    }

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key) {
                    let quit = event == UiEvent::Quit;
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
    let input_height = (area.height * 15 / 100).max(3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(1),            // Error
            Constraint::Min(3),               // Result
            Constraint::Length(input_height), // Draft
            Constraint::Length(1),            // Help
        ])
        .split(area);

    f.render_widget(ui::render_title(state), chunks[0]);

    if let Some(error) = &state.error {
        let error_bar =
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::LightRed));
        f.render_widget(error_bar, chunks[1]);
    }

    draw_result(f, state, chunks[2]);
    draw_draft(f, state, chunks[3]);
    f.render_widget(ui::render_help(), chunks[4]);
}

fn draw_result(f: &mut Frame, state: &RenderState, area: Rect) {
    let time_text = match (state.is_loading, state.time_ms) {
        (true, _) => String::from(" [...] "),
        (false, Some(ms)) => format!(" {}ms ", ms),
        (false, None) => String::new(),
    };

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(Line::from(time_text).right_aligned());

    let result = Paragraph::new(ui::result_lines(state))
        .block(block)
        .scroll((state.result_scroll, 0));
    f.render_widget(result, area);
}

fn draw_draft(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::left(1));

    // Keep the cursor row inside the visible area
    let (row, col) = ui::cursor_row_col(&state.draft, state.cursor_position);
    let visible_rows = area.height.max(1) as usize;
    let scroll = row.saturating_sub(visible_rows - 1);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let draft = Paragraph::new(state.draft.as_str())
        .block(block)
        .scroll((scroll, 0));
    f.render_widget(draft, area);

    let offset = u16::try_from(row.saturating_sub(scroll as usize))
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(1));
    let cursor_y = area.y.saturating_add(offset);
    f.set_cursor_position(Position::new(ui::draft_cursor_x(area, col), cursor_y));
}
