#![allow(dead_code)]

use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::sync::RwLock;

use crate::models::{MembershipStatus, Role};

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Membership status colors
    StatusAccepted,
    StatusRejected,
    StatusPending,
    StatusUnknown,

    // Role colors
    RoleStudent,
    RoleTeacher,
    RoleAdmin,

    // Entity colors
    Team,
    Leader,
    User,

    // UI colors
    Header,
    Border,
    Selection,
    Error,
    Warning,
    Success,
    Info,

    // Text colors
    Primary,
    Secondary,
    Muted,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: std::collections::HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    /// Create the default theme
    pub fn default() -> Self {
        let mut colors = std::collections::HashMap::new();

        // Membership status colors: accepted is good, rejected is bad,
        // pending is a warning, anything else is neutral.
        colors.insert(SemanticColor::StatusAccepted, Color::Green);
        colors.insert(SemanticColor::StatusRejected, Color::Red);
        colors.insert(SemanticColor::StatusPending, Color::Yellow);
        colors.insert(SemanticColor::StatusUnknown, Color::TrueColor { r: 124, g: 124, b: 124 });

        // Role colors
        colors.insert(SemanticColor::RoleStudent, Color::Blue);
        colors.insert(SemanticColor::RoleTeacher, Color::Magenta);
        colors.insert(SemanticColor::RoleAdmin, Color::BrightRed);

        // Entity colors
        colors.insert(SemanticColor::Team, Color::Cyan);
        colors.insert(SemanticColor::Leader, Color::BrightYellow);
        colors.insert(SemanticColor::User, Color::Green);

        // UI colors
        colors.insert(SemanticColor::Header, Color::TrueColor { r: 21, g: 76, b: 121 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(SemanticColor::Selection, Color::BrightYellow);
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        // Text colors
        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Secondary, Color::TrueColor { r: 180, g: 180, b: 180 });
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 90, g: 90, b: 90 });

        Self { colors }
    }

    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    /// Set a color for a semantic meaning
    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::default()
    }
}

lazy_static! {
    /// Global theme instance
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::default());
}

/// Get the current theme
pub fn current_theme() -> ColorTheme {
    THEME.read().unwrap().clone()
}

/// Set the global theme
pub fn set_theme(theme: ColorTheme) {
    *THEME.write().unwrap() = theme;
}

/// Get a color from the current theme
pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME.read().unwrap().get(semantic)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

/// Helper functions for common color applications
pub mod helpers {
    use super::*;

    pub fn status_color(status: MembershipStatus) -> SemanticColor {
        match status {
            MembershipStatus::Accepted => SemanticColor::StatusAccepted,
            MembershipStatus::Rejected => SemanticColor::StatusRejected,
            MembershipStatus::Pending => SemanticColor::StatusPending,
            MembershipStatus::Unknown => SemanticColor::StatusUnknown,
        }
    }

    pub fn role_color(role: Role) -> SemanticColor {
        match role {
            Role::Student => SemanticColor::RoleStudent,
            Role::Teacher => SemanticColor::RoleTeacher,
            Role::Admin => SemanticColor::RoleAdmin,
            Role::Unknown => SemanticColor::Muted,
        }
    }

    pub fn status_symbol(status: MembershipStatus) -> &'static str {
        match status {
            MembershipStatus::Accepted => "✓",
            MembershipStatus::Rejected => "✗",
            MembershipStatus::Pending => "◌",
            MembershipStatus::Unknown => "•",
        }
    }
}
