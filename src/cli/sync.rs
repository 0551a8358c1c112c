//! `gist sync` output.

use std::io::Write;

use color_eyre::Result;

use crate::service::GistService;

pub async fn handle_sync_command(service: &GistService, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Syncing gists from GitHub...")?;
    let gists = service.sync_gists().await?;
    writeln!(out, "✓ Synced {} gist(s)", gists.len())?;
    Ok(())
}
