use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;
use crate::error::AllocationError;
use crate::formatting::teams::{print_invitations, print_no_team, print_team};
use crate::models::{Role, User};

pub async fn handle_team(
    context: &mut AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("show", _)) => handle_show(context).await,
        Some(("create", sub_matches)) => handle_create(context, sub_matches).await,
        Some(("invite", sub_matches)) => handle_invite(context, sub_matches).await,
        Some(("leave", _)) => handle_leave(context).await,
        Some(("delete", _)) => handle_delete(context).await,
        Some(("remove", sub_matches)) => handle_remove(context, sub_matches).await,
        _ => {
            println!("Usage: allocate team <show|create|invite|leave|delete|remove>");
            Ok(())
        }
    }
}

async fn viewer(context: &mut AppContext) -> Result<User, Box<dyn std::error::Error>> {
    if let Some(user) = context.user() {
        return Ok(user.clone());
    }
    Ok(context.refresh_user().await?)
}

async fn handle_show(context: &mut AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let user = viewer(context).await?;
    let client = context.client()?;

    // The teams page requests both views concurrently on entry
    let (team, invitations) = tokio::join!(client.my_team(), client.invitations());

    match team? {
        Some(team) => print_team(&team, &user),
        None => print_no_team(&user),
    }

    match invitations {
        Ok(invitations) => print_invitations(&invitations),
        Err(_) => println!("\n{}", "Failed to fetch invitations.".red()),
    }

    Ok(())
}

async fn handle_create(
    context: &mut AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = viewer(context).await?;
    let client = context.client()?;

    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| AllocationError::InvalidInput("Team name is required".to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AllocationError::InvalidInput("Team name cannot be empty".to_string()).into());
    }

    let team = client.create_team(name).await?;

    println!("{} {}", "✅".green(), "Team created successfully!".green().bold());
    print_team(&team, &user);

    Ok(())
}

async fn handle_invite(
    context: &mut AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = viewer(context).await?;
    let client = context.client()?;

    let user_id = matches
        .get_one::<String>("user-id")
        .ok_or_else(|| AllocationError::InvalidInput("University ID is required".to_string()))?;

    client.invite_member(user_id.trim()).await?;
    println!("{} {}", "✅".green(), "Invitation sent!".green().bold());

    // Reflect the new pending membership
    if let Some(team) = client.my_team().await? {
        print_team(&team, &user);
    }

    Ok(())
}

async fn handle_leave(context: &mut AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let client = context.client()?;
    client.leave_team().await?;
    println!("{} You left the team.", "✅".green());
    Ok(())
}

async fn handle_delete(context: &mut AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let user = viewer(context).await?;
    let client = context.client()?;

    let team = client
        .my_team()
        .await?
        .ok_or_else(|| AllocationError::Api("You are not in a team".to_string()))?;

    // Convenience gate only; the server enforces this on its side too
    if !team.is_led_by(&user) && user.role != Role::Admin {
        return Err(AllocationError::InvalidInput(
            "Only the team leader can delete the team. Use 'allocate team leave' instead."
                .to_string(),
        )
        .into());
    }

    client.delete_team(team.id).await?;
    println!(
        "{} Team \"{}\" deleted. All members have been removed.",
        "✅".green(),
        team.name
    );
    Ok(())
}

async fn handle_remove(
    context: &mut AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = context.client()?;

    let membership_id: i64 = matches
        .get_one::<String>("id")
        .ok_or_else(|| AllocationError::InvalidInput("Membership ID is required".to_string()))?
        .parse()
        .map_err(|_| {
            AllocationError::InvalidInput("Membership ID must be a number".to_string())
        })?;

    client.remove_member(membership_id).await?;
    println!("{} Member removed from the team.", "✅".green());
    Ok(())
}
