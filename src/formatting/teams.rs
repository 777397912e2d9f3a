use colored::*;

use crate::constants::TEAM_CAPACITY;
use crate::models::{Invitation, Membership, Role, Team, User};

use super::theme::helpers::{role_color, status_color, status_symbol};
use super::theme::ThemedColorize;
use super::utils::{format_date, format_relative_time, truncate};

pub fn print_user(user: &User) {
    println!("Logged in as: {} ({})", user.full_name().bold(), user.username);
    if let Some(department) = &user.department {
        println!("{}: {}", "Department".bold(), department);
    }
    println!(
        "{}: {}",
        "Role".bold(),
        user.role.to_string().with_theme(role_color(user.role))
    );
}

pub fn print_team(team: &Team, viewer: &User) {
    println!("\n{}", "─".repeat(70).bright_black());
    println!(
        "{} {} {}",
        "My Team:".bold(),
        team.name.cyan().bold(),
        capacity_chip(team)
    );

    let created = team
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "Created by {} on {}",
        team.leader.full_name().green(),
        created.bright_black()
    );
    println!("{}", "─".repeat(70).bright_black());

    if team.members.is_empty() {
        println!("{}", "No members yet.".bright_black());
    } else {
        for member in &team.members {
            print_member_row(member, team, viewer);
        }
    }

    let mut actions: Vec<String> = Vec::new();
    if viewer.role == Role::Student && team.can_invite {
        actions.push("invite <university-id>".to_string());
    }
    if team.is_led_by(viewer) {
        actions.push("delete".to_string());
    } else if team.can_leave {
        actions.push("leave".to_string());
    }
    if !actions.is_empty() {
        println!(
            "\n{} allocate team {}",
            "Actions:".bold(),
            actions.join(" | ").bright_black()
        );
    }
}

pub fn print_no_team(viewer: &User) {
    println!("{}", "You're not in a team yet.".bold());
    println!(
        "Create a team to start applying for projects, or wait for an invitation to join an existing team."
    );
    if viewer.role == Role::Student {
        println!(
            "\nRun {} to create one.",
            "allocate team create <name>".cyan()
        );
    }
}

pub fn print_invitations(invitations: &[Invitation]) {
    if invitations.is_empty() {
        println!("\nNo pending invitations.");
        return;
    }

    println!("\n{}", "Pending Invitations".bold());
    println!("{}", "─".repeat(70).bright_black());
    for invitation in invitations {
        println!(
            "{:<6} Invitation to join: {}  (from {})",
            format!("#{}", invitation.id).bright_blue().bold(),
            invitation.team.name.cyan(),
            invitation.team.leader.full_name().green()
        );
    }
    println!(
        "\nRespond with {} or {}",
        "allocate invitations accept <id>".cyan(),
        "allocate invitations reject <id>".cyan()
    );
}

fn print_member_row(member: &Membership, team: &Team, viewer: &User) {
    let crown = if member.is_leader { " 👑" } else { "" };
    let status = member
        .status
        .to_string()
        .with_theme(status_color(member.status));
    let symbol = status_symbol(member.status);

    let department = member
        .user
        .department
        .as_deref()
        .unwrap_or("-");

    let invited = member
        .invited_at
        .as_deref()
        .map(format_relative_time)
        .unwrap_or_default();

    let mut hints: Vec<&str> = Vec::new();
    if member.removable_by(viewer, team) {
        hints.push("removable");
    }
    if member.leavable_by(viewer) {
        hints.push("you can leave");
    }
    let hint = if hints.is_empty() {
        String::new()
    } else {
        format!(" ({})", hints.join(", "))
    };

    println!(
        "{} {:<28} {:<14} {:<18} [{}] {}{}",
        symbol,
        format!("{}{}", truncate(&member.user.full_name(), 26), crown),
        member.user.username,
        truncate(department, 16),
        status,
        invited.bright_black(),
        hint.bright_black()
    );
}

fn capacity_chip(team: &Team) -> ColoredString {
    let chip = format!("[{}/{} Members]", team.member_count, TEAM_CAPACITY);
    if team.is_full {
        chip.green().bold()
    } else {
        chip.blue()
    }
}
