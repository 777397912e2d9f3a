use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{Focus, InteractiveApp};
use super::layout::app_layout;
use super::notifications;
use super::panels::{dashboard, header, placeholder, team};
use super::popups;
use super::state::Page;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let area = frame.size();
    let layout = app_layout(area, app.notifications.len());

    header::draw_header(frame, layout.header, app);

    match app.page {
        Page::Dashboard => dashboard::draw_dashboard(frame, layout.main, app),
        Page::Teams => team::draw_teams_page(frame, layout.main, app),
        Page::Professors => placeholder::draw_placeholder(
            frame,
            layout.main,
            "Professors",
            "Professors listing page - Coming soon!",
        ),
        Page::Applications => placeholder::draw_placeholder(
            frame,
            layout.main,
            "Applications",
            "Applications management page - Coming soon!",
        ),
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    // Popups draw over the whole frame
    popups::draw_popup(frame, area, app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hint = if app.teams.confirm.is_open() {
        "y: Confirm  n/Esc: Cancel".to_string()
    } else if app.popup.is_some() {
        "Enter: Submit  Esc: Cancel".to_string()
    } else {
        match app.page {
            Page::Teams => {
                let list_hint = match app.focus {
                    Focus::Members => "x: Remove/Leave member",
                    Focus::Invitations => "Enter: Accept  x: Reject",
                };
                format!(
                    "Tab: Switch list  j/k: Move  c: Create  i: Invite  D: Delete/Leave team  {}  r: Refresh  q: Quit",
                    list_hint
                )
            }
            _ => "1: Dashboard  2: Professors  3: Teams  4: Applications  r: Refresh  L: Logout  q: Quit"
                .to_string(),
        }
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let footer = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )))
    .block(block);
    frame.render_widget(footer, area);
}
