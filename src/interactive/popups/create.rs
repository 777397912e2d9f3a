use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::{InteractiveApp, Popup};
use crate::interactive::layout::centered_popup;

/// Draw the create-team form popup.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(Popup::CreateTeam(input)) = &app.popup else {
        return;
    };

    let width: u16 = 56;
    let height: u16 = 8;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Create New Team ")
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let value = if input.value.is_empty() {
        Span::styled("<team name>", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            input.value.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Team Name: ", Style::default().fg(Color::Green)),
            value,
        ]),
        Line::from(Span::styled(
            "Choose a unique name for your team",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(error) = &input.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let body_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines), body_area);

    // Hints at the bottom; Enter stays inert while the name trims to empty
    // or a call is running.
    let hint = if input.submitting {
        "Creating...".to_string()
    } else if input.can_submit() {
        "Enter: Create Team  Esc: Cancel".to_string()
    } else {
        "Type a team name  Esc: Cancel".to_string()
    };
    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        hints_area,
    );
}
