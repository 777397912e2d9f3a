use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;
use crate::error::AllocationError;
use crate::formatting::teams::print_invitations;
use crate::models::InvitationReply;

pub async fn handle_invitations(
    context: &mut AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("accept", sub_matches)) => {
            respond(context, sub_matches, InvitationReply::Accepted).await
        }
        Some(("reject", sub_matches)) => {
            respond(context, sub_matches, InvitationReply::Rejected).await
        }
        // Bare `allocate invitations` lists
        _ => handle_list(context).await,
    }
}

async fn handle_list(context: &mut AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let client = context.client()?;
    let invitations = client.invitations().await?;
    print_invitations(&invitations);
    Ok(())
}

async fn respond(
    context: &mut AppContext,
    matches: &ArgMatches,
    reply: InvitationReply,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = context.client()?;

    let invitation_id: i64 = matches
        .get_one::<String>("id")
        .ok_or_else(|| AllocationError::InvalidInput("Invitation ID is required".to_string()))?
        .parse()
        .map_err(|_| {
            AllocationError::InvalidInput("Invitation ID must be a number".to_string())
        })?;

    client.respond_invitation(invitation_id, reply).await?;

    match reply {
        InvitationReply::Accepted => {
            println!("{} Invitation accepted!", "✅".green());
            // The caller has a team now
            if let Some(team) = client.my_team().await? {
                println!("You are now a member of {}.", team.name.cyan().bold());
            }
        }
        InvitationReply::Rejected => {
            println!("Invitation rejected.");
        }
    }

    // The pending list is always refreshed after a response
    let invitations = client.invitations().await?;
    print_invitations(&invitations);

    Ok(())
}
