use ratatui::{prelude::*, widgets::*};

use crate::messages::FriendRow;
use crate::models::BalanceStatus;

/// Renders a text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders one friend as a two-line list item
pub fn render_friend_row(row: &FriendRow) -> ListItem<'static> {
    let friend = &row.friend;
    let name_style = if row.is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().bold()
    };

    let header = Line::from(vec![
        Span::styled(friend.name.clone(), name_style),
        Span::raw("  "),
        Span::styled(format!("[{}]", toggle_label(row.is_selected)), Style::default().fg(Color::Cyan)),
        Span::styled(format!("  {}", friend.image), Style::default().fg(Color::DarkGray)),
    ]);
    let balance = Line::from(Span::styled(
        format!("  {}", friend.balance_label()),
        Style::default().fg(balance_color(friend.status())),
    ));

    ListItem::new(vec![header, balance])
}

/// Label of the per-friend selection toggle
pub fn toggle_label(is_selected: bool) -> &'static str {
    if is_selected {
        "Close"
    } else {
        "Select"
    }
}

/// Label of the composer toggle
pub fn composer_label(is_open: bool) -> &'static str {
    if is_open {
        "Close"
    } else {
        "Add friend"
    }
}

/// Balance colour
pub fn balance_color(status: BalanceStatus) -> Color {
    match status {
        BalanceStatus::YouOwe(_) => Color::Red,
        BalanceStatus::TheyOwe(_) => Color::Green,
        BalanceStatus::Even => Color::Reset,
    }
}

/// Column for the cursor at the end of `content` inside a bordered input
pub fn cursor_x(area: Rect, content: &str) -> u16 {
    let len = u16::try_from(content.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(len).saturating_add(1).min(max_x)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
