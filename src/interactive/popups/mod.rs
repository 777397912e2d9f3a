pub mod confirm;
pub mod create;
pub mod invite;

use ratatui::{layout::Rect, Frame};

use crate::interactive::app::{InteractiveApp, Popup};

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    match &app.popup {
        Some(Popup::CreateTeam(_)) => create::draw(frame, area, app),
        Some(Popup::InviteMember(_)) => invite::draw(frame, area, app),
        None => {}
    }

    // The confirmation flow lives on the teams state, not the popup slot.
    if app.teams.confirm.is_open() {
        confirm::draw(frame, area, app);
    }
}
