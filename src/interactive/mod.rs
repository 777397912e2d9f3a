pub mod app;
pub mod event;
pub mod layout;
pub mod notifications;
pub mod panels;
pub mod popups;
pub mod state;
pub mod ui;

use std::io;

use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::context::AppContext;
use crate::error::{AllocationError, AllocationResult};
use crate::logging::{log_error, log_info, log_panic_info};
use crate::models::InvitationReply;

use app::{Focus, InteractiveApp};
use event::{Event, EventHandler};
use state::Page;

/// Run the terminal UI. Returns true when the user asked to log out.
pub async fn run_interactive_mode(context: &mut AppContext) -> AllocationResult<bool> {
    log_info("Starting interactive mode");

    // Fail closed before touching the terminal
    context.client()?;

    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    enable_raw_mode().map_err(|e| AllocationError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AllocationError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| AllocationError::Terminal(e.to_string()))?;

    let result = run_loop(&mut terminal, context).await;

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        log_error(&format!("Interactive mode failed: {}", e));
    }
    log_info("Exiting interactive mode");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    context: &mut AppContext,
) -> AllocationResult<bool> {
    let mut app = InteractiveApp::new(context).await?;
    let events = EventHandler::new(100);

    loop {
        terminal
            .draw(|f| ui::draw(f, &app))
            .map_err(|e| AllocationError::Terminal(e.to_string()))?;

        match events.recv() {
            Ok(Event::Key(key_event)) => dispatch_key(&mut app, key_event.code).await,
            Ok(Event::Tick) => app.prune_notifications(),
            Err(_) => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.logout_requested)
}

/// Route keys that trigger API calls; everything else goes through the
/// app's synchronous handler.
async fn dispatch_key(app: &mut InteractiveApp, key: KeyCode) {
    if app.teams.confirm.is_open() {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.run_confirmed_action().await
            }
            _ => app.handle_key(key),
        }
        return;
    }

    if app.popup.is_some() {
        match key {
            KeyCode::Enter => app.submit_popup().await,
            _ => app.handle_key(key),
        }
        return;
    }

    match key {
        KeyCode::Char('1') => app.enter_page(Page::Dashboard).await,
        KeyCode::Char('2') => app.enter_page(Page::Professors).await,
        KeyCode::Char('3') => app.enter_page(Page::Teams).await,
        KeyCode::Char('4') => app.enter_page(Page::Applications).await,
        KeyCode::Char('r') => app.refresh_current_page().await,
        KeyCode::Enter if app.page == Page::Teams && app.focus == Focus::Invitations => {
            app.respond_selected_invitation(InvitationReply::Accepted).await
        }
        KeyCode::Char('x') if app.page == Page::Teams && app.focus == Focus::Invitations => {
            app.respond_selected_invitation(InvitationReply::Rejected).await
        }
        _ => app.handle_key(key),
    }
}
