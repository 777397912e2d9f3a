use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::constants::TEAM_CAPACITY;
use crate::formatting::utils::{format_date, truncate};
use crate::interactive::app::{Focus, InteractiveApp};
use crate::interactive::layout::teams_layout;
use crate::interactive::state::TeamView;
use crate::models::{Membership, MembershipStatus, Role, Team};

pub fn status_style(status: MembershipStatus) -> Style {
    match status {
        MembershipStatus::Accepted => Style::default().fg(Color::Green),
        MembershipStatus::Rejected => Style::default().fg(Color::Red),
        MembershipStatus::Pending => Style::default().fg(Color::Yellow),
        MembershipStatus::Unknown => Style::default().fg(Color::DarkGray),
    }
}

pub fn draw_teams_page(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    if matches!(app.teams.view, TeamView::Loading) {
        let loading = Paragraph::new("Loading team information...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Team Management "));
        frame.render_widget(loading, area);
        return;
    }

    let layout = teams_layout(area, app.teams.invitations.len());

    match &app.teams.view {
        TeamView::Team(team) => {
            draw_overview(frame, layout.overview, app, team);
            draw_members(frame, layout.members, app, team);
        }
        _ => {
            draw_no_team(frame, layout.overview, layout.members, app);
        }
    }

    draw_invitations(frame, layout.invitations, app);
}

fn draw_overview(frame: &mut Frame, area: Rect, app: &InteractiveApp, team: &Team) {
    let chip_style = if team.is_full {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("My Team: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                team.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}/{} Members]", team.member_count, TEAM_CAPACITY),
                chip_style,
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Created by {} on {}",
                team.leader.full_name(),
                team.created_at.as_deref().map(format_date).unwrap_or_else(|| "unknown".into())
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(error) = &app.teams.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Team Management ");
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_no_team(frame: &mut Frame, overview: Rect, body: Rect, app: &InteractiveApp) {
    let mut lines = vec![Line::from(Span::styled(
        "You're not in a team yet",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(error) = &app.teams.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Team Management ");
    frame.render_widget(Paragraph::new(lines).block(block), overview);

    let mut help = vec![Line::from(
        "Create a team to start applying for projects, or wait for an invitation to join an existing team.",
    )];
    if app.user.role == Role::Student {
        help.push(Line::from(""));
        help.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("c", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" to create a team."),
        ]));
    }
    let paragraph = Paragraph::new(help)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, body);
}

fn draw_members(frame: &mut Frame, area: Rect, app: &InteractiveApp, team: &Team) {
    let focused = app.focus == Focus::Members;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Team Members ({}) ", team.members.len()))
        .border_style(border_style);

    if team.members.is_empty() {
        let empty = Paragraph::new("No members")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll_offset = if app.teams.selected_member >= inner_height {
        app.teams.selected_member - inner_height + 1
    } else {
        0
    };

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = team
        .members
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(inner_height)
        .map(|(i, member)| member_row(app, team, member, i, width, focused))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn member_row<'a>(
    app: &InteractiveApp,
    team: &Team,
    member: &'a Membership,
    index: usize,
    width: usize,
    focused: bool,
) -> ListItem<'a> {
    let selected = index == app.teams.selected_member && focused;
    let marker = if selected { "► " } else { "  " };

    let crown = if member.is_leader { " 👑" } else { "" };
    let department = member.user.department.as_deref().unwrap_or("-");

    let base_style = if selected {
        Style::default()
            .bg(Color::Rgb(30, 35, 50))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let name_width = (width / 3).max(12);
    let mut spans = vec![
        Span::styled(marker.to_string(), base_style),
        Span::styled(
            format!(
                "{:<name_width$}",
                format!("{}{}", truncate(&member.user.full_name(), name_width), crown),
            ),
            base_style,
        ),
        Span::styled(
            format!("{} • {}  ", member.user.username, truncate(department, 16)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("[{}]", member.status),
            status_style(member.status),
        ),
    ];

    // Surface what the viewer can do with this row
    if member.removable_by(&app.user, team) {
        spans.push(Span::styled(
            "  x:remove",
            Style::default().fg(Color::DarkGray),
        ));
    } else if member.leavable_by(&app.user) {
        spans.push(Span::styled(
            "  x:leave",
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn draw_invitations(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.focus == Focus::Invitations;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Pending Invitations ({}) ", app.teams.invitations.len()))
        .border_style(border_style);

    if app.teams.invitations.is_empty() {
        let empty = Paragraph::new("No pending invitations")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .teams
        .invitations
        .iter()
        .enumerate()
        .map(|(i, invitation)| {
            let selected = i == app.teams.selected_invitation && focused;
            let style = if selected {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if selected { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker.to_string(), style),
                Span::styled(
                    format!("Invitation to join: {}", invitation.team.name),
                    style,
                ),
                Span::styled(
                    format!("  From: {}", invitation.team.leader.full_name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
