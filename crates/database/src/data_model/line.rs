use async_trait::async_trait;
use metro::database::{LineRepo, Repo, Result};
use model::line::{Line, LineType};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::{
    queries::line::{get, get_all},
    SqliteReader,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct LineRow {
    pub id: i64,
    pub name_fa: String,
    pub name_en: String,
    #[sqlx(rename = "type")]
    pub kind: i64,
    pub color: String,
}

impl DatabaseRow for LineRow {
    type Model = Line;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Line {
            id: self.get_id(),
            name_fa: self.name_fa,
            name_en: self.name_en,
            kind: LineType::from_int(self.kind),
            color: self.color,
        }
    }
}

// Repo

#[async_trait]
impl Repo<Line> for SqliteReader {
    async fn get(&mut self, id: Id<Line>) -> Result<Line> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<Line>> {
        get_all(&self.pool).await
    }
}

impl LineRepo for SqliteReader {}
