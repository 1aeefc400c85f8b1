//! Response representations for wallposts.
//!
//! A wallpost serializes with a `"type"` discriminator (`"text"` or
//! `"media"`) so clients can render mixed lists. The discriminator is
//! derived from which child table owns the post; it never exists as a
//! column. Media posts additionally carry `video_html`, an embed
//! fragment computed from `video_url` at serialization time.

use serde::Serialize;

use fundra_core::embed::video_embed_html;
use fundra_core::timesince::timesince;
use fundra_core::types::{DbId, Timestamp};
use fundra_db::models::member::MemberSummary;
use fundra_db::models::reaction::ReactionDetail;
use fundra_db::models::wallpost::{WallPost, WallPostDetail};

/// Fields shared by both wallpost variants.
#[derive(Debug, Clone, Serialize)]
pub struct WallPostCommon {
    pub id: DbId,
    pub author: MemberSummary,
    pub created: Timestamp,
    /// Humanized age, e.g. "3 days ago".
    pub timesince: String,
    pub reactions: Vec<ReactionDetail>,
    pub project_id: DbId,
    /// Detail resource path for this post.
    pub url: String,
}

/// A wallpost as it appears in API responses, tagged by variant.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WallPostView {
    Text {
        #[serde(flatten)]
        common: WallPostCommon,
        text: String,
    },
    Media {
        #[serde(flatten)]
        common: WallPostCommon,
        title: String,
        text: String,
        video_url: Option<String>,
        /// Iframe embed fragment, `null` when the URL is absent or
        /// unrecognized.
        video_html: Option<String>,
    },
}

impl WallPostView {
    /// Build the response view for a loaded post, its author, and its
    /// reactions. `now` is the clock reference for the age string.
    pub fn from_detail(detail: WallPostDetail, now: Timestamp) -> Self {
        let WallPostDetail {
            post,
            author,
            reactions,
        } = detail;

        let base = post.base();
        let common = WallPostCommon {
            id: base.id,
            author,
            created: base.created_at,
            timesince: timesince(base.created_at, now),
            reactions,
            project_id: post.parent().parent_id(),
            url: format!("/api/v1/wallposts/{}", base.id),
        };

        match post {
            WallPost::Text(post) => WallPostView::Text {
                common,
                text: post.text,
            },
            WallPost::Media(post) => {
                let video_html = post.video_url.as_deref().and_then(video_embed_html);
                WallPostView::Media {
                    common,
                    title: post.title,
                    text: post.text,
                    video_url: post.video_url,
                    video_html,
                }
            }
        }
    }
}
