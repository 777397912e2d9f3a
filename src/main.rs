use std::process;

use clap::{Arg, Command};
use colored::*;

use allocation_cli::commands::{auth, dashboard, invitations, team, whoami};
use allocation_cli::context::AppContext;
use allocation_cli::interactive;
use allocation_cli::logging::init_logging;

fn build_cli() -> Command {
    Command::new("allocate")
        .about("Project Allocation System - manage teams and invitations from the command line")
        .version("0.1.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Authenticate with the Project Allocation System")
                .subcommand(
                    Command::new("login")
                        .about("Log in and store session credentials")
                        .arg(
                            Arg::new("username")
                                .long("username")
                                .short('u')
                                .value_name("UNIVERSITY_ID")
                                .help("Your university ID (e.g., 2021CS001)")
                                .required(true),
                        )
                        .arg(
                            Arg::new("password")
                                .long("password")
                                .short('p')
                                .value_name("PASSWORD")
                                .help("Your account password")
                                .required(true),
                        )
                        .arg(
                            Arg::new("api-url")
                                .long("api-url")
                                .value_name("URL")
                                .help("API base URL to use and remember")
                                .required(false),
                        ),
                )
                .subcommand(Command::new("logout").about("Clear the stored session"))
                .subcommand(Command::new("show").about("Show the current session"))
                .subcommand(Command::new("register").about("Register a new account")),
        )
        .subcommand(Command::new("whoami").about("Show current user information"))
        .subcommand(Command::new("dashboard").about("Show your role-specific dashboard"))
        .subcommand(
            Command::new("team")
                .about("Manage your team")
                .subcommand(Command::new("show").about("Show your team and pending invitations"))
                .subcommand(
                    Command::new("create").about("Create a new team").arg(
                        Arg::new("name")
                            .value_name("NAME")
                            .help("Team name")
                            .required(true)
                            .index(1),
                    ),
                )
                .subcommand(
                    Command::new("invite")
                        .about("Invite a student to your team")
                        .arg(
                            Arg::new("user-id")
                                .value_name("UNIVERSITY_ID")
                                .help("University ID of the student to invite")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(Command::new("leave").about("Leave your team"))
                .subcommand(
                    Command::new("delete")
                        .about("Delete your team (leader only, removes all members)"),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a member from your team (leader/admin only)")
                        .arg(
                            Arg::new("id")
                                .value_name("MEMBERSHIP_ID")
                                .help("Membership ID to remove")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("invitations")
                .about("List and respond to team invitations")
                .subcommand(
                    Command::new("accept").about("Accept an invitation").arg(
                        Arg::new("id")
                            .value_name("INVITATION_ID")
                            .help("Invitation ID to accept")
                            .required(true)
                            .index(1),
                    ),
                )
                .subcommand(
                    Command::new("reject").about("Reject an invitation").arg(
                        Arg::new("id")
                            .value_name("INVITATION_ID")
                            .help("Invitation ID to reject")
                            .required(true)
                            .index(1),
                    ),
                ),
        )
        .subcommand(Command::new("interactive").about("Launch the interactive terminal UI"))
}

async fn handle_interactive(
    context: &mut AppContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let logout_requested = interactive::run_interactive_mode(context).await?;
    if logout_requested {
        context.logout()?;
        println!("Logged out. Session credentials cleared.");
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = init_logging();

    let matches = build_cli().get_matches();

    let mut context = match AppContext::init() {
        Ok(context) => context,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => auth::handle_auth(&mut context, sub_matches).await,
        Some(("whoami", sub_matches)) => whoami::handle_whoami(&mut context, sub_matches).await,
        Some(("dashboard", sub_matches)) => {
            dashboard::handle_dashboard(&mut context, sub_matches).await
        }
        Some(("team", sub_matches)) => team::handle_team(&mut context, sub_matches).await,
        Some(("invitations", sub_matches)) => {
            invitations::handle_invitations(&mut context, sub_matches).await
        }
        Some(("interactive", _)) => handle_interactive(&mut context).await,
        _ => {
            eprintln!("Unknown command. Use 'allocate --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
