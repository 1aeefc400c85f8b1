//! Wallpost models and DTOs.
//!
//! A wallpost is one row in the `wallposts` base table plus exactly one
//! row in a concrete child table (`text_wallposts` or `media_wallposts`).
//! The concrete variant is determined by which child table owns the id;
//! no discriminator column exists. In code a loaded post is the
//! [`WallPost`] sum type.

use serde::{Deserialize, Serialize};
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

use crate::models::member::MemberSummary;
use crate::models::reaction::ReactionDetail;

/// The entity kinds a wallpost can be attached to.
///
/// Stored as `wallposts.parent_type`; always constructed through this
/// enum, never from a client-supplied string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentType {
    Project,
}

impl ParentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ParentType::Project => "project",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "project" => Some(ParentType::Project),
            _ => None,
        }
    }
}

/// A wallpost's parent reference as a tagged union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallPostParent {
    Project(DbId),
}

impl WallPostParent {
    pub fn parent_type(self) -> ParentType {
        match self {
            WallPostParent::Project(_) => ParentType::Project,
        }
    }

    pub fn parent_id(self) -> DbId {
        match self {
            WallPostParent::Project(id) => id,
        }
    }
}

/// Shared columns from the `wallposts` base table.
#[derive(Debug, Clone, Serialize)]
pub struct WallPostBase {
    pub id: DbId,
    pub parent_type: ParentType,
    pub parent_id: DbId,
    pub author_id: DbId,
    pub created_at: Timestamp,
}

/// A text wallpost: base columns plus the `text_wallposts` child row.
#[derive(Debug, Clone, Serialize)]
pub struct TextWallPost {
    pub base: WallPostBase,
    pub text: String,
}

/// A media wallpost: base columns plus the `media_wallposts` child row.
#[derive(Debug, Clone, Serialize)]
pub struct MediaWallPost {
    pub base: WallPostBase,
    pub title: String,
    pub text: String,
    pub video_url: Option<String>,
}

/// A loaded wallpost in its concrete variant.
#[derive(Debug, Clone)]
pub enum WallPost {
    Text(TextWallPost),
    Media(MediaWallPost),
}

impl WallPost {
    pub fn base(&self) -> &WallPostBase {
        match self {
            WallPost::Text(post) => &post.base,
            WallPost::Media(post) => &post.base,
        }
    }

    pub fn id(&self) -> DbId {
        self.base().id
    }

    pub fn parent(&self) -> WallPostParent {
        let base = self.base();
        match base.parent_type {
            ParentType::Project => WallPostParent::Project(base.parent_id),
        }
    }
}

/// A wallpost with the author and reactions its representation nests.
#[derive(Debug, Clone)]
pub struct WallPostDetail {
    pub post: WallPost,
    pub author: MemberSummary,
    pub reactions: Vec<ReactionDetail>,
}

/// DTO for creating a text wallpost. The parent is bound by the
/// endpoint, not the payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTextWallPost {
    pub author_id: DbId,
    #[validate(length(min = 1))]
    pub text: String,
}

/// DTO for creating a media wallpost.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMediaWallPost {
    pub author_id: DbId,
    #[validate(length(max = 60))]
    pub title: Option<String>,
    pub text: Option<String>,
    #[validate(length(max = 100))]
    pub video_url: Option<String>,
}
