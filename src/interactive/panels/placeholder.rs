use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Static stub pages with no behavior yet.
pub fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, body: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));
    let paragraph = Paragraph::new(body.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(paragraph, area);
}
