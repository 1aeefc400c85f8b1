//! Repository for the `wallposts` table hierarchy.
//!
//! A post is stored as a base row plus one concrete child row; loads
//! LEFT JOIN both child tables and resolve the variant from which join
//! matched. A base row with no child row is an internal inconsistency
//! and surfaces as a decode error.

use sqlx::PgPool;

use fundra_core::types::{DbId, Timestamp};

use crate::models::member::MemberSummary;
use crate::models::wallpost::{
    CreateMediaWallPost, CreateTextWallPost, MediaWallPost, ParentType, TextWallPost, WallPost,
    WallPostBase, WallPostDetail, WallPostParent,
};
use crate::repositories::ReactionRepo;

/// Select list joining the base row, both child tables, and the author.
const SELECT_POSTS: &str = "SELECT w.id, w.parent_type, w.parent_id, w.author_id, w.created_at, \
        t.wallpost_id AS text_marker, t.text AS text_body, \
        m.wallpost_id AS media_marker, m.title AS media_title, \
        m.text AS media_text, m.video_url, \
        a.username, a.first_name, a.last_name \
     FROM wallposts w \
     LEFT JOIN text_wallposts t ON t.wallpost_id = w.id \
     LEFT JOIN media_wallposts m ON m.wallpost_id = w.id \
     JOIN members a ON a.id = w.author_id";

/// Provides CRUD operations for wallposts of all variants.
pub struct WallPostRepo;

impl WallPostRepo {
    /// Insert a text wallpost bound to `parent`, returning the created post.
    pub async fn create_text(
        pool: &PgPool,
        parent: WallPostParent,
        input: &CreateTextWallPost,
    ) -> Result<WallPost, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let base = Self::insert_base(&mut tx, parent, input.author_id).await?;

        sqlx::query("INSERT INTO text_wallposts (wallpost_id, text) VALUES ($1, $2)")
            .bind(base.id)
            .bind(&input.text)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(WallPost::Text(TextWallPost {
            base,
            text: input.text.clone(),
        }))
    }

    /// Insert a media wallpost bound to `parent`, returning the created post.
    pub async fn create_media(
        pool: &PgPool,
        parent: WallPostParent,
        input: &CreateMediaWallPost,
    ) -> Result<WallPost, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let base = Self::insert_base(&mut tx, parent, input.author_id).await?;

        let title = input.title.clone().unwrap_or_default();
        let text = input.text.clone().unwrap_or_default();
        sqlx::query(
            "INSERT INTO media_wallposts (wallpost_id, title, text, video_url) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(base.id)
        .bind(&title)
        .bind(&text)
        .bind(&input.video_url)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(WallPost::Media(MediaWallPost {
            base,
            title,
            text,
            video_url: input.video_url.clone(),
        }))
    }

    /// Find a wallpost by its primary key, resolved to its concrete variant.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WallPost>, sqlx::Error> {
        let query = format!("{SELECT_POSTS} WHERE w.id = $1");
        let row: Option<PostRow> = sqlx::query_as(&query).bind(id).fetch_optional(pool).await?;
        row.map(PostRow::into_post).transpose()
    }

    /// Find a wallpost together with its author and reactions.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WallPostDetail>, sqlx::Error> {
        let query = format!("{SELECT_POSTS} WHERE w.id = $1");
        let row: Option<PostRow> = sqlx::query_as(&query).bind(id).fetch_optional(pool).await?;
        match row {
            Some(row) => Ok(Some(Self::into_detail(pool, row).await?)),
            None => Ok(None),
        }
    }

    /// List a parent's wallposts with authors and reactions, newest first.
    pub async fn list_for_parent(
        pool: &PgPool,
        parent: WallPostParent,
    ) -> Result<Vec<WallPostDetail>, sqlx::Error> {
        let query = format!(
            "{SELECT_POSTS} \
             WHERE w.parent_type = $1 AND w.parent_id = $2 \
             ORDER BY w.created_at DESC, w.id DESC"
        );
        let rows: Vec<PostRow> = sqlx::query_as(&query)
            .bind(parent.parent_type().as_str())
            .bind(parent.parent_id())
            .fetch_all(pool)
            .await?;

        let mut details = Vec::with_capacity(rows.len());
        for row in rows {
            details.push(Self::into_detail(pool, row).await?);
        }
        Ok(details)
    }

    /// Delete a wallpost by its ID (child row and reactions cascade).
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wallposts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_base(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        parent: WallPostParent,
        author_id: DbId,
    ) -> Result<WallPostBase, sqlx::Error> {
        let row: BaseRow = sqlx::query_as(
            "INSERT INTO wallposts (parent_type, parent_id, author_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, parent_type, parent_id, author_id, created_at",
        )
        .bind(parent.parent_type().as_str())
        .bind(parent.parent_id())
        .bind(author_id)
        .fetch_one(&mut **tx)
        .await?;
        row.into_base()
    }

    async fn into_detail(pool: &PgPool, row: PostRow) -> Result<WallPostDetail, sqlx::Error> {
        let author = MemberSummary {
            id: row.author_id,
            username: row.username.clone(),
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
        };
        let post = row.into_post()?;
        let reactions = ReactionRepo::list_for_wallpost(pool, post.id()).await?;
        Ok(WallPostDetail {
            post,
            author,
            reactions,
        })
    }
}

fn decode_err(message: String) -> sqlx::Error {
    sqlx::Error::Decode(message.into())
}

/// Internal helper struct for the base-row insert.
#[derive(Debug, sqlx::FromRow)]
struct BaseRow {
    id: DbId,
    parent_type: String,
    parent_id: DbId,
    author_id: DbId,
    created_at: Timestamp,
}

impl BaseRow {
    fn into_base(self) -> Result<WallPostBase, sqlx::Error> {
        let parent_type = ParentType::from_str(&self.parent_type)
            .ok_or_else(|| decode_err(format!("unknown wallpost parent type: {}", self.parent_type)))?;
        Ok(WallPostBase {
            id: self.id,
            parent_type,
            parent_id: self.parent_id,
            author_id: self.author_id,
            created_at: self.created_at,
        })
    }
}

/// Internal helper struct for the polymorphic post join.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: DbId,
    parent_type: String,
    parent_id: DbId,
    author_id: DbId,
    created_at: Timestamp,
    text_marker: Option<DbId>,
    text_body: Option<String>,
    media_marker: Option<DbId>,
    media_title: Option<String>,
    media_text: Option<String>,
    video_url: Option<String>,
    username: String,
    first_name: String,
    last_name: String,
}

impl PostRow {
    /// Resolve the concrete variant from which child join matched.
    fn into_post(self) -> Result<WallPost, sqlx::Error> {
        let parent_type = ParentType::from_str(&self.parent_type)
            .ok_or_else(|| decode_err(format!("unknown wallpost parent type: {}", self.parent_type)))?;
        let base = WallPostBase {
            id: self.id,
            parent_type,
            parent_id: self.parent_id,
            author_id: self.author_id,
            created_at: self.created_at,
        };

        if self.text_marker.is_some() {
            Ok(WallPost::Text(TextWallPost {
                base,
                text: self.text_body.unwrap_or_default(),
            }))
        } else if self.media_marker.is_some() {
            Ok(WallPost::Media(MediaWallPost {
                base,
                title: self.media_title.unwrap_or_default(),
                text: self.media_text.unwrap_or_default(),
                video_url: self.video_url,
            }))
        } else {
            Err(decode_err(format!(
                "wallpost {} has no concrete child row",
                base.id
            )))
        }
    }
}
