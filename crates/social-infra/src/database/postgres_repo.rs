//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Set,
};

use social_core::domain::Post;
use social_core::error::RepoError;
use social_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Row shape of the endpoint select list, decoded by column label.
///
/// Keeps the label-to-field conversion independent of the full table model:
/// queries name exactly these four columns and `removed` stays behind.
#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: i64,
    content: String,
    likes: i32,
    created: sea_orm::prelude::DateTimeWithTimeZone,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            likes: row.likes,
            created: row.created.into(),
        }
    }
}

/// PostgreSQL posts repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn select_posts() -> sea_orm::Select<PostEntity> {
        PostEntity::find().select_only().columns([
            post::Column::Id,
            post::Column::Content,
            post::Column::Likes,
            post::Column::Created,
        ])
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_active(&self) -> Result<Vec<Post>, RepoError> {
        let rows = Self::select_posts()
            .filter(post::Column::Removed.eq(false))
            .order_by_desc(post::Column::Id)
            .into_model::<PostRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_active(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let row = Self::select_posts()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .into_model::<PostRow>()
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_removed(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let row = Self::select_posts()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(true))
            .into_model::<PostRow>()
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, content: &str) -> Result<i64, RepoError> {
        // likes, removed and created take their column defaults.
        let model = post::ActiveModel {
            content: Set(content.to_owned()),
            ..Default::default()
        };

        let result = PostEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.last_insert_id)
    }

    async fn update_content(&self, id: i64, content: &str) -> Result<(), RepoError> {
        PostEntity::update_many()
            .set(post::ActiveModel {
                content: Set(content.to_owned()),
                ..Default::default()
            })
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }

    async fn set_removed(&self, id: i64, removed: bool) -> Result<(), RepoError> {
        PostEntity::update_many()
            .set(post::ActiveModel {
                removed: Set(removed),
                ..Default::default()
            })
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(!removed))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }

    async fn set_likes(&self, id: i64, likes: i32) -> Result<(), RepoError> {
        PostEntity::update_many()
            .set(post::ActiveModel {
                likes: Set(likes),
                ..Default::default()
            })
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
