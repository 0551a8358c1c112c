//! `gist publish` output.

use std::io::Write;
use std::path::PathBuf;

use color_eyre::Result;

use crate::service::GistService;

pub async fn handle_publish_command(
    service: &GistService,
    files: &[PathBuf],
    description: &str,
    public: bool,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Publishing {} file(s) to GitHub...", files.len())?;
    let gist = service.publish_files(files, description, public).await?;
    writeln!(out, "✓ Created gist: {}", gist.id)?;
    if !gist.html_url.is_empty() {
        writeln!(out, "  {}", gist.html_url)?;
    }
    Ok(())
}
