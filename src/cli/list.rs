//! `gist list` output.

use std::collections::BTreeMap;
use std::io::{self, Write};

use color_eyre::Result;
use unicode_width::UnicodeWidthStr;

use crate::models::Gist;
use crate::service::{tags, GistService};

const MAX_LISTED_FILES: usize = 3;
const MAX_DESCRIPTION_CHARS: usize = 10;
const COLUMN_GAP: usize = 2;

pub async fn handle_list_command(
    service: &GistService,
    tag: Option<&str>,
    show_tags: bool,
    out: &mut impl Write,
) -> Result<()> {
    let gists = service.list_gists().await?;

    if gists.is_empty() {
        writeln!(out, "No gists found")?;
        writeln!(out, "Create your first gist with 'gist publish <file>'")?;
        return Ok(());
    }

    if show_tags {
        write_tag_summary(out, &tags::tag_summary(&gists))?;
        return Ok(());
    }

    let mut selected: Vec<&Gist> = match tag.filter(|t| !t.is_empty()) {
        Some(tag) => {
            let filtered = tags::filter_by_tag(&gists, tag);
            if filtered.is_empty() {
                writeln!(out, "No gists found with tag #{}", tag.trim_start_matches('#'))?;
                return Ok(());
            }
            filtered
        }
        None => gists.iter().collect(),
    };

    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    write_gist_table(out, &selected)?;
    Ok(())
}

pub fn write_tag_summary(out: &mut impl Write, summary: &BTreeMap<String, usize>) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(out, "No tags found");
    }
    writeln!(out, "Tags:")?;
    for (tag, count) in summary {
        writeln!(out, "  #{:<20} ({} gists)", tag, count)?;
    }
    Ok(())
}

/// Aligned `ID CREATED FILES DESCRIPTION` table, rows in the given order.
pub fn write_gist_table(out: &mut impl Write, gists: &[&Gist]) -> io::Result<()> {
    let header = ["ID", "CREATED", "FILES", "DESCRIPTION"].map(String::from);
    let rows: Vec<[String; 4]> = std::iter::once(header)
        .chain(gists.iter().map(|g| table_row(g)))
        .collect();

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let pad = widths[i] - cell.width() + COLUMN_GAP;
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn table_row(gist: &Gist) -> [String; 4] {
    let mut files = file_list(gist);
    if !gist.public {
        files.insert(0, '+');
    }
    [
        gist.id.short().to_string(),
        gist.created_at.format("%Y-%m-%d").to_string(),
        files,
        short_description(&gist.description),
    ]
}

/// Sorted filenames, the first three then a total count.
pub fn file_list(gist: &Gist) -> String {
    let names = gist.filenames();
    if names.len() > MAX_LISTED_FILES {
        format!(
            "{}... ({} files)",
            names[..MAX_LISTED_FILES].join(", "),
            names.len()
        )
    } else {
        names.join(", ")
    }
}

pub fn short_description(description: &str) -> String {
    let description = if description.is_empty() {
        "(no description)"
    } else {
        description
    };
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        let head: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}
