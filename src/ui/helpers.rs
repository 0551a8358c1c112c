//! Formatting helpers shared by the session widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::Gist;

/// Spinner frames for the loading view
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render ticks per spinner frame (~80ms at 16ms ticks)
const TICKS_PER_FRAME: u64 = 5;

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Truncate to a display width, appending "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Second line of a list item: visibility, file count and creation date.
pub fn item_details(gist: &Gist) -> String {
    let visibility = if gist.public {
        "🌐 Public"
    } else {
        "🔒 Private"
    };
    format!(
        "{} • {} file(s) • {}",
        visibility,
        gist.files.len(),
        gist.created_at.format("%Y-%m-%d")
    )
}
