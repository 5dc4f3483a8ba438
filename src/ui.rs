use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;

const HELP_ENTRIES: [(&str, &str); 7] = [
    ("Ctrl+C", "quit"),
    ("Tab", "send request"),
    ("Ctrl+↑", "scroll result ↑"),
    ("Ctrl+↓", "scroll result ↓"),
    ("Alt+A", "copy response"),
    ("Alt+S", "copy headers"),
    ("Alt+D", "copy selected header"),
];

/// Title bar; red while an error is shown
pub fn render_title(state: &RenderState) -> Paragraph<'static> {
    let background = if state.error.is_some() {
        Color::LightRed
    } else {
        Color::Green
    };
    let loading = if state.is_loading { " [...]" } else { "" };

    Paragraph::new(format!("{}{}", state.title, loading))
        .style(Style::default().fg(Color::White).bg(background))
}

/// Key binding summary shown at the bottom
pub fn render_help() -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(HELP_ENTRIES.len() * 3);
    for (i, (key, action)) in HELP_ENTRIES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Paragraph::new(Line::from(spans))
}

/// Viewport lines: header lines coloured and the selected one highlighted,
/// blank separators, then the body split on newlines
pub fn result_lines(state: &RenderState) -> Vec<Line<'static>> {
    let Some((body, headers)) = state.result.split_last() else {
        return Vec::new();
    };

    let header_style = Style::default().fg(Color::LightBlue);
    let selected_style = Style::default().fg(Color::LightBlue).bg(Color::White);
    // request lines, separator, then the status line
    let status_index = headers.iter().position(String::is_empty).map(|i| i + 1);

    let mut lines = Vec::with_capacity(headers.len() + 1);
    for (idx, head) in headers.iter().enumerate() {
        let style = if idx == state.selected_line {
            selected_style
        } else if Some(idx) == status_index {
            status_style(head)
        } else {
            header_style
        };
        lines.push(Line::from(Span::styled(head.clone(), style)));
    }
    lines.extend(body.lines().map(|line| Line::raw(line.to_string())));
    lines
}

fn status_style(line: &str) -> Style {
    let code = line
        .split_whitespace()
        .next()
        .and_then(|c| c.parse::<u16>().ok());
    match code {
        Some(code) => Style::default().fg(status_color(code)).bold(),
        None => Style::default().fg(Color::LightBlue),
    }
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Zero-based (row, column) of a byte offset, column counted in characters
pub fn cursor_row_col(text: &str, cursor: usize) -> (usize, usize) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (row, before[line_start..].chars().count())
}

/// Screen column of the draft cursor: past the border and padding, kept inside `area`
pub fn draft_cursor_x(area: Rect, col: usize) -> u16 {
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(1));
    area.x.saturating_add(2).saturating_add(col).min(max_x)
}
