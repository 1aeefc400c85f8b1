//! Project slug generation.
//!
//! Slugs are URL identifiers derived from the entity title: lowercase
//! ASCII alphanumerics with single hyphens between words. A slug must
//! never be empty, so titles that slugify to nothing (empty, all
//! punctuation) fall back to an identity-derived slug.

use crate::types::DbId;

/// Maximum slug length, matching the `VARCHAR(100)` column.
pub const MAX_SLUG_LEN: usize = 100;

/// Slugify a title: lowercase, alphanumerics kept, everything else
/// collapsed into single hyphens, trimmed to [`MAX_SLUG_LEN`].
///
/// Returns an empty string when the title contains no usable
/// characters; callers wanting the non-empty invariant should use
/// [`slug_for`].
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    slug
}

/// Slug for a project, falling back to `project-{id}` when the title
/// slugifies to nothing. The result is always non-empty.
pub fn slug_for(title: &str, id: DbId) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("project-{id}")
    } else {
        slug
    }
}
