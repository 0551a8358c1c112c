//! Hashtag extraction and filtering over gist descriptions.
//!
//! Tags are never stored. They are recomputed from the description on every
//! listing or filtering pass.
//!
//! ```
//! use gist::service::tags::extract_tags;
//!
//! assert_eq!(extract_tags("Fix bug #golang #cli."), vec!["golang", "cli"]);
//! assert!(extract_tags("no tags here").is_empty());
//! ```

use std::collections::BTreeMap;

use crate::models::Gist;

/// Characters stripped from the end of a tag.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Extract tags from free text, in order of appearance.
pub fn extract_tags(description: &str) -> Vec<String> {
    description
        .split_whitespace()
        .filter_map(|token| token.strip_prefix('#'))
        .map(|tag| tag.trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tags of a gist's description.
pub fn gist_tags(gist: &Gist) -> Vec<String> {
    extract_tags(&gist.description)
}

/// Case-insensitive tag membership. A leading `#` on `tag` is ignored.
pub fn has_tag(gist: &Gist, tag: &str) -> bool {
    let wanted = normalize(tag);
    if wanted.is_empty() {
        return false;
    }
    gist_tags(gist)
        .iter()
        .any(|t| t.to_lowercase() == wanted)
}

/// Gists carrying `tag`, preserving input order.
pub fn filter_by_tag<'a>(gists: &'a [Gist], tag: &str) -> Vec<&'a Gist> {
    gists.iter().filter(|g| has_tag(g, tag)).collect()
}

/// Number of gists per distinct tag, keyed by lowercase tag name.
///
/// A gist mentioning the same tag twice is counted once.
pub fn tag_summary(gists: &[Gist]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for gist in gists {
        let mut seen: Vec<String> = gist_tags(gist).iter().map(|t| t.to_lowercase()).collect();
        seen.sort();
        seen.dedup();
        for tag in seen {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
}

fn normalize(tag: &str) -> String {
    tag.trim()
        .strip_prefix('#')
        .unwrap_or(tag.trim())
        .to_lowercase()
}
