use colored::Color;

use crate::formatting::theme::helpers::{role_color, status_color, status_symbol};
use crate::formatting::theme::{ColorTheme, SemanticColor};
use crate::models::{MembershipStatus, Role};

#[test]
fn test_default_theme() {
    let theme = ColorTheme::default();

    // Membership status colors
    assert_eq!(theme.get(SemanticColor::StatusAccepted), Color::Green);
    assert_eq!(theme.get(SemanticColor::StatusRejected), Color::Red);
    assert_eq!(theme.get(SemanticColor::StatusPending), Color::Yellow);

    // UI colors
    assert_eq!(theme.get(SemanticColor::Error), Color::Red);
    assert_eq!(theme.get(SemanticColor::Success), Color::Green);
}

#[test]
fn test_status_color_helper() {
    assert_eq!(
        status_color(MembershipStatus::Accepted),
        SemanticColor::StatusAccepted
    );
    assert_eq!(
        status_color(MembershipStatus::Rejected),
        SemanticColor::StatusRejected
    );
    assert_eq!(
        status_color(MembershipStatus::Pending),
        SemanticColor::StatusPending
    );
    assert_eq!(
        status_color(MembershipStatus::Unknown),
        SemanticColor::StatusUnknown
    );
}

#[test]
fn test_role_color_helper() {
    assert_eq!(role_color(Role::Student), SemanticColor::RoleStudent);
    assert_eq!(role_color(Role::Teacher), SemanticColor::RoleTeacher);
    assert_eq!(role_color(Role::Admin), SemanticColor::RoleAdmin);
    assert_eq!(role_color(Role::Unknown), SemanticColor::Muted);
}

#[test]
fn test_status_symbol_helper() {
    assert_eq!(status_symbol(MembershipStatus::Accepted), "✓");
    assert_eq!(status_symbol(MembershipStatus::Rejected), "✗");
    assert_eq!(status_symbol(MembershipStatus::Pending), "◌");
}

#[test]
fn test_theme_override() {
    let mut theme = ColorTheme::default();
    theme.set(SemanticColor::StatusPending, Color::Magenta);
    assert_eq!(theme.get(SemanticColor::StatusPending), Color::Magenta);
}
