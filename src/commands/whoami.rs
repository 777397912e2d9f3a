use clap::ArgMatches;

use crate::context::AppContext;
use crate::formatting::teams::print_user;

pub async fn handle_whoami(
    context: &mut AppContext,
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = context.refresh_user().await?;
    print_user(&user);
    Ok(())
}
