//! Organization command implementation

use crate::cli::CommandContext;
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::output;

/// Run the org command
pub async fn get(ctx: &CommandContext, name: &str) -> Result<()> {
    let client = ctx.org_client(name);
    let org = client.organization().await?;

    output::print(&vec![OrgDisplay::new(name, org)], ctx.format)
}
