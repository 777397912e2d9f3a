use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;
use crate::error::AllocationError;

pub async fn handle_auth(
    context: &mut AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("login", sub_matches)) => handle_login(context, sub_matches).await,
        Some(("logout", _)) => {
            context.logout()?;
            println!("Logged out. Session credentials cleared.");
            Ok(())
        }
        Some(("show", _)) => {
            handle_show(context);
            Ok(())
        }
        Some(("register", _)) => {
            // Stub page; accounts are provisioned by the registrar for now
            println!("Registration - Coming soon!");
            Ok(())
        }
        _ => {
            println!("Usage: allocate auth <login|logout|show|register>");
            Ok(())
        }
    }
}

async fn handle_login(
    context: &mut AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(api_url) = matches.get_one::<String>("api-url") {
        context.set_api_url(api_url.clone())?;
    }

    let username = matches
        .get_one::<String>("username")
        .ok_or_else(|| AllocationError::InvalidInput("Username is required".to_string()))?;
    let password = matches
        .get_one::<String>("password")
        .ok_or_else(|| AllocationError::InvalidInput("Password is required".to_string()))?;

    match context.login(username, password).await {
        Ok(user) => {
            println!(
                "{} Logged in as: {} ({})",
                "✅".green(),
                user.full_name().bold(),
                user.username
            );
            println!("Role: {}", user.role);
        }
        Err(e) => {
            println!("{} Failed to authenticate: {}", "❌".red(), e.inline_message());
        }
    }
    Ok(())
}

fn handle_show(context: &AppContext) {
    println!("API URL: {}", context.api_url());
    match context.user() {
        Some(user) => println!(
            "Session: {} ({}), role {}",
            user.full_name(),
            user.username,
            user.role
        ),
        None => println!("No session. Run 'allocate auth login' to authenticate."),
    }
}
