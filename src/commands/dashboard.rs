use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;
use crate::models::Role;

pub async fn handle_dashboard(
    context: &mut AppContext,
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = context.refresh_user().await?;

    let welcome = match user.role {
        Role::Student => "Welcome to your Student Dashboard",
        Role::Teacher => "Welcome to your Professor Dashboard",
        Role::Admin => "Welcome to your Admin Dashboard",
        Role::Unknown => "Welcome to the Project Allocation System",
    };
    println!("{}", welcome.bold());
    println!("Hello, {} ({})\n", user.full_name(), user.username);

    match user.role {
        Role::Student => {
            println!("{}", "Team Management".bold());
            println!("Create or join a team to start applying for projects.");

            let client = context.client()?;
            match client.my_team().await {
                Ok(Some(team)) => {
                    println!(
                        "{} You are in team: {}",
                        "✓".green(),
                        team.name.green().bold()
                    );
                }
                Ok(None) => {
                    println!(
                        "Run {} to create one.",
                        "allocate team create <name>".cyan()
                    );
                }
                Err(_) => {
                    println!("{}", "Failed to fetch team information".red());
                }
            }

            println!("\n{}", "Applications".bold());
            println!("Track your team's project applications and responses.");
        }
        Role::Teacher => {
            println!("{}", "Applications Received".bold());
            println!("Review and respond to team applications for your projects.");
            println!("\n{}", "Profile Management".bold());
            println!("Update your research domains and available project slots.");
        }
        Role::Admin => {
            println!("{}", "System Overview".bold());
            println!("Monitor the overall allocation process and statistics.");
            println!("\n{}", "User Management".bold());
            println!("Manage users, teams, and applications across the system.");
        }
        Role::Unknown => {}
    }

    Ok(())
}
