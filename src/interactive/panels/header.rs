use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::state::nav_items;

/// Top bar: application title, role-filtered navigation tabs, and the
/// signed-in user's identity.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " Project Allocation ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for page in nav_items(app.user.role) {
        let active = page == app.page;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", page.title()), style));
        spans.push(Span::raw(" "));
    }

    let identity = format!(
        "{} ({}) ",
        app.user.full_name(),
        app.user.role
    );
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + identity.chars().count());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(identity, Style::default().fg(Color::DarkGray)));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let header = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(header, area);
}
