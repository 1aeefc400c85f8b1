//! Video embed fragment builder.
//!
//! Turns a pasted YouTube or Vimeo URL into the iframe fragment the
//! wallpost serializer exposes as `video_html`. This is a pure local
//! function: no oEmbed endpoint is consulted, only the URL forms the
//! product accepts (youtube.com/watch, youtu.be, vimeo.com).

/// Default embed dimensions, matching the media wallpost layout.
pub const EMBED_WIDTH: u32 = 560;
pub const EMBED_HEIGHT: u32 = 315;

/// Build an iframe embed fragment for a video URL.
///
/// Returns `None` when the URL is not a recognized YouTube or Vimeo
/// video link; callers serialize that as a null `video_html`.
pub fn video_embed_html(video_url: &str) -> Option<String> {
    let embed_url = embed_url_for(video_url)?;
    Some(format!(
        "<iframe width=\"{EMBED_WIDTH}\" height=\"{EMBED_HEIGHT}\" src=\"{embed_url}\" \
         frameborder=\"0\" allowfullscreen></iframe>"
    ))
}

/// Map a video page URL to its player URL.
fn embed_url_for(video_url: &str) -> Option<String> {
    let rest = video_url
        .strip_prefix("https://")
        .or_else(|| video_url.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    if let Some(query) = rest.strip_prefix("youtube.com/watch?") {
        let id = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .filter(|id| is_video_id(id))?;
        return Some(format!("https://www.youtube.com/embed/{id}"));
    }

    if let Some(id) = rest.strip_prefix("youtu.be/") {
        let id = id.split(['?', '/']).next().filter(|id| is_video_id(id))?;
        return Some(format!("https://www.youtube.com/embed/{id}"));
    }

    if let Some(id) = rest.strip_prefix("vimeo.com/") {
        let id = id.split(['?', '/']).next()?;
        if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
            return Some(format!("https://player.vimeo.com/video/{id}"));
        }
    }

    None
}

fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
