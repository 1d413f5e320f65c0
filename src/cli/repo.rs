//! Repository listing command

use futures::future::try_join_all;
use log::debug;

use crate::cli::CommandContext;
use crate::error::Result;
use crate::models::RepoDisplay;
use crate::output;

/// Run the repos command
///
/// Every organization gets its own client; the lookups run concurrently and
/// rows are printed in argument order.
pub async fn list(ctx: &CommandContext, names: &[String], license: Option<&str>) -> Result<()> {
    let lookups = names.iter().map(|name| async move {
        let client = ctx.org_client(name);
        let repos = client.list_public_repository_names(license).await?;
        debug!("{} repositories listed for {}", repos.len(), name);
        Ok::<_, crate::error::Error>(
            repos
                .into_iter()
                .map(|repo| RepoDisplay::new(name, repo))
                .collect::<Vec<_>>(),
        )
    });

    let rows: Vec<RepoDisplay> = try_join_all(lookups).await?.into_iter().flatten().collect();

    output::print(&rows, ctx.format)
}
