use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use ratatui::layout::{Constraint, Direction, Layout};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::dashboard_columns;
use crate::models::Role;

fn welcome_message(role: Role) -> &'static str {
    match role {
        Role::Student => "Welcome to your Student Dashboard",
        Role::Teacher => "Welcome to your Professor Dashboard",
        Role::Admin => "Welcome to your Admin Dashboard",
        Role::Unknown => "Welcome to the Project Allocation System",
    }
}

pub fn draw_dashboard(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            welcome_message(app.user.role),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Hello, {} ({})",
                app.user.full_name(),
                app.user.username
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(welcome, chunks[0]);

    let (left, right) = dashboard_columns(chunks[1]);
    match app.user.role {
        Role::Student => {
            draw_student_team_card(frame, left, app);
            draw_card(
                frame,
                right,
                " Applications ",
                "Track your team's project applications and responses.",
            );
        }
        Role::Teacher => {
            draw_card(
                frame,
                left,
                " Applications Received ",
                "Review and respond to team applications for your projects.",
            );
            draw_card(
                frame,
                right,
                " Profile Management ",
                "Update your research domains and available project slots.",
            );
        }
        Role::Admin => {
            draw_card(
                frame,
                left,
                " System Overview ",
                "Monitor the overall allocation process and statistics.",
            );
            draw_card(
                frame,
                right,
                " User Management ",
                "Manage users, teams, and applications across the system.",
            );
        }
        Role::Unknown => {}
    }
}

fn draw_student_team_card(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let mut lines = vec![
        Line::from("Create or join a team to start applying for projects."),
        Line::from(""),
    ];

    if app.dashboard.loading {
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(team) = &app.dashboard.team {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw("You are in team: "),
            Span::styled(
                team.name.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "c",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to create a team."),
        ]));
    }

    if let Some(error) = &app.dashboard.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(" Team Management ");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_card(frame: &mut Frame, area: Rect, title: &str, body: &str) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let paragraph = Paragraph::new(body.to_string())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
