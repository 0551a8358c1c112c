//! `gist show` output.

use std::io::{self, Write};

use color_eyre::Result;

use crate::models::Gist;
use crate::service::GistService;

const PREVIEW_LINES: usize = 20;
const RULE_WIDTH: usize = 60;

pub async fn handle_show_command(
    service: &GistService,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let gist = service.get_gist_with_content(id).await?;
    write_gist_details(out, &gist)?;
    Ok(())
}

pub fn write_gist_details(out: &mut impl Write, gist: &Gist) -> io::Result<()> {
    writeln!(out, "Gist: {}", gist.id)?;
    writeln!(out, "URL: {}", gist.html_url)?;
    if !gist.description.is_empty() {
        writeln!(out, "Description: {}", gist.description)?;
    }
    writeln!(out, "Visibility: {}", gist.visibility_label())?;
    writeln!(out, "Created: {}", gist.created_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Updated: {}", gist.updated_at.format("%Y-%m-%d %H:%M:%S"))?;

    writeln!(out)?;
    writeln!(out, "Files ({}):", gist.files.len())?;
    for (name, file) in &gist.files {
        writeln!(
            out,
            "  - {} ({} lines, {} bytes)",
            name,
            file.line_count(),
            file.byte_size()
        )?;
    }

    if gist.files.len() == 1 {
        if let Some(file) = gist.files.values().next() {
            writeln!(out)?;
            writeln!(out, "Content preview:")?;
            write_preview(out, file.content.as_deref().unwrap_or_default())?;
        }
    }
    Ok(())
}

/// First lines of `content` between two rules.
fn write_preview(out: &mut impl Write, content: &str) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;

    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() <= PREVIEW_LINES {
        write!(out, "{}", content)?;
        if !content.is_empty() && !content.ends_with('\n') {
            writeln!(out)?;
        }
    } else {
        for line in &lines[..PREVIEW_LINES] {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        writeln!(out, "... ({} more lines)", lines.len() - PREVIEW_LINES)?;
    }

    writeln!(out, "{}", rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GistId;

    fn render(gist: &Gist) -> String {
        let mut out = Vec::new();
        write_gist_details(&mut out, gist).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn gist_with(files: &[(&str, &str)]) -> Gist {
        let mut gist = Gist::new_local("Backup script #bash", false);
        gist.id = GistId::from("abc123");
        gist.html_url = "https://gist.github.com/abc123".into();
        for (name, content) in files {
            gist.add_file(*name, *content);
        }
        gist
    }

    #[test]
    fn test_single_file_shows_preview() {
        let text = render(&gist_with(&[("backup.sh", "echo hi\nexit 0\n")]));

        assert!(text.starts_with("Gist: abc123\nURL: https://gist.github.com/abc123\n"));
        assert!(text.contains("Description: Backup script #bash\n"));
        assert!(text.contains("Visibility: private\n"));
        assert!(text.contains("Files (1):\n  - backup.sh (3 lines, 15 bytes)\n"));
        assert!(text.contains("Content preview:\n"));
        assert!(text.contains("echo hi\nexit 0\n"));
        assert_eq!(text.matches(&"-".repeat(60)).count(), 2);
    }

    #[test]
    fn test_long_content_is_cut() {
        let content: String = (1..=30).map(|i| format!("line {}\n", i)).collect();
        let text = render(&gist_with(&[("long.txt", &content)]));

        assert!(text.contains("line 20\n"));
        assert!(!text.contains("line 21"));
        assert!(text.contains("... (11 more lines)"));
    }

    #[test]
    fn test_multiple_files_have_no_preview() {
        let text = render(&gist_with(&[("b.txt", "b"), ("a.txt", "a")]));

        assert!(text.contains("Files (2):\n  - a.txt (1 lines, 1 bytes)\n  - b.txt (1 lines, 1 bytes)\n"));
        assert!(!text.contains("Content preview"));
    }

    #[test]
    fn test_empty_description_omitted() {
        let mut gist = gist_with(&[("a.txt", "a")]);
        gist.description.clear();
        assert!(!render(&gist).contains("Description:"));
    }
}
